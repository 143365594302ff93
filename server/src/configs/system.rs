use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// Relative path created under the temp or home base directory.
    pub subdirectory: String,
    /// Environment variable holding the home base directory.
    pub home_env_var: String,
    /// Overrides the system temp directory when not empty.
    pub temp_path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LimitsConfig {
    pub max_data_size: u64,
    pub max_app_buffer_size: u32,
    /// Applies to the resolved size, so the sentinel is checked as well.
    pub max_stream_buffer_size: u32,
    /// Number of payload blocks kept around for reuse between measurements.
    pub pooled_payload_buffers: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory of the log file. Empty disables file logging.
    pub path: String,
}
