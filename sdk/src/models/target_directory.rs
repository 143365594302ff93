use crate::error::DiskPerfError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Storage location class under which benchmark files are created.
///
/// `Temp` is the fast scratch volume, `Home` the persistent one. The variant
/// order makes `Temp` compare greater than `Home`, so a descending sort puts
/// temp runs first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TargetDirectory {
    Home,
    Temp,
}

impl TargetDirectory {
    pub fn parse(value: &str) -> Result<Self, DiskPerfError> {
        TargetDirectory::from_str(value.trim())
            .map_err(|_| DiskPerfError::InvalidTargetDirectory(value.to_string()))
    }
}
