use crate::configs::http::HttpConfig;
use crate::configs::server::ServerConfig;
use crate::configs::system::{LimitsConfig, LoggingConfig, StorageConfig};

const MIB: u64 = 1024 * 1024;

impl Default for ServerConfig {
    fn default() -> ServerConfig {
        ServerConfig {
            http: HttpConfig::default(),
            storage: StorageConfig::default(),
            limits: LimitsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> HttpConfig {
        HttpConfig {
            address: "0.0.0.0:3000".to_string(),
            access_key: "".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> StorageConfig {
        StorageConfig {
            subdirectory: "diskperf/temp".to_string(),
            home_env_var: "HOME".to_string(),
            temp_path: "".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> LimitsConfig {
        LimitsConfig {
            max_data_size: 1024 * MIB,
            max_app_buffer_size: (512 * MIB) as u32,
            max_stream_buffer_size: (512 * MIB) as u32,
            pooled_payload_buffers: 4,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            level: "info".to_string(),
            path: "".to_string(),
        }
    }
}
