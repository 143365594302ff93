use crate::error::DiskPerfError;
use std::collections::HashMap;
use std::str::FromStr;

/// Read-only view over raw query string parameters with case-insensitive names.
#[derive(Debug)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn new(params: &HashMap<String, String>) -> Self {
        let values = params
            .iter()
            .map(|(key, value)| (key.to_lowercase(), value.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&name.to_lowercase())
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn required<T: FromStr>(&self, name: &str) -> Result<T, DiskPerfError> {
        let value = self
            .get(name)
            .ok_or_else(|| DiskPerfError::MissingParameter(name.to_string()))?;
        value
            .parse::<T>()
            .map_err(|_| DiskPerfError::InvalidParameter(name.to_string(), value.to_string()))
    }

    pub fn optional<T: FromStr>(&self, name: &str, default: T) -> Result<T, DiskPerfError> {
        match self.get(name) {
            Some(_) => self.required(name),
            None => Ok(default),
        }
    }
}
