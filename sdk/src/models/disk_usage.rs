use crate::models::target_directory::TargetDirectory;
use serde::{Deserialize, Serialize};

/// Free and total space of the volume backing a target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DiskUsage {
    #[serde(rename(serialize = "targetDir", deserialize = "targetdir"))]
    pub target_directory: TargetDirectory,
    pub path: String,
    #[serde(rename(deserialize = "freebytes"))]
    pub free_bytes: u64,
    #[serde(rename(deserialize = "totalbytes"))]
    pub total_bytes: u64,
}
