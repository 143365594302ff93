use crate::configs::config_provider::ConfigProvider;
use crate::configs::http::HttpConfig;
use crate::configs::system::{LimitsConfig, LoggingConfig, StorageConfig};
use crate::server_error::ServerError;
use diskperf::validatable::Validatable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub http: HttpConfig,
    pub storage: StorageConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

impl ServerConfig {
    pub fn load(config_provider: &dyn ConfigProvider) -> Result<ServerConfig, ServerError> {
        let server_config = config_provider.load_config()?;
        server_config.validate()?;
        Ok(server_config)
    }
}
