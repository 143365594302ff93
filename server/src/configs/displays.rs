use crate::configs::http::HttpConfig;
use crate::configs::server::ServerConfig;
use crate::configs::system::{LimitsConfig, LoggingConfig, StorageConfig};
use std::fmt::{Display, Formatter};

impl Display for ServerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ http: {}, storage: {}, limits: {}, logging: {} }}",
            self.http, self.storage, self.limits, self.logging
        )
    }
}

impl Display for HttpConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ address: {}, access_key: {} }}",
            self.address,
            if self.access_key.is_empty() {
                "disabled"
            } else {
                "******"
            }
        )
    }
}

impl Display for StorageConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ subdirectory: {}, home_env_var: {}, temp_path: {} }}",
            self.subdirectory, self.home_env_var, self.temp_path
        )
    }
}

impl Display for LimitsConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ max_data_size: {}, max_app_buffer_size: {}, max_stream_buffer_size: {}, pooled_payload_buffers: {} }}",
            self.max_data_size,
            self.max_app_buffer_size,
            self.max_stream_buffer_size,
            self.pooled_payload_buffers
        )
    }
}

impl Display for LoggingConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ level: {}, path: {} }}", self.level, self.path)
    }
}
