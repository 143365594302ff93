use crate::configs::server::ServerConfig;
use crate::configs::system::{LimitsConfig, StorageConfig};
use crate::server_error::ServerError;
use diskperf::validatable::Validatable;
use std::path::Path;
use tracing::error;

impl Validatable<ServerError> for ServerConfig {
    fn validate(&self) -> Result<(), ServerError> {
        self.storage.validate()?;
        self.limits.validate()?;

        Ok(())
    }
}

impl Validatable<ServerError> for StorageConfig {
    fn validate(&self) -> Result<(), ServerError> {
        let subdirectory = Path::new(&self.subdirectory);
        if self.subdirectory.is_empty() || subdirectory.is_absolute() {
            error!("Storage configuration -> subdirectory must be a non-empty relative path.");
            return Err(ServerError::InvalidConfiguration(format!(
                "storage.subdirectory: '{}'",
                self.subdirectory
            )));
        }

        if self.home_env_var.is_empty() {
            error!("Storage configuration -> home environment variable name cannot be empty.");
            return Err(ServerError::InvalidConfiguration(
                "storage.home_env_var is empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validatable<ServerError> for LimitsConfig {
    fn validate(&self) -> Result<(), ServerError> {
        if self.max_app_buffer_size == 0 {
            error!("Limits configuration -> max app buffer size must be greater than 0.");
            return Err(ServerError::InvalidConfiguration(
                "limits.max_app_buffer_size is 0".to_string(),
            ));
        }

        if self.max_stream_buffer_size == 0 {
            error!("Limits configuration -> max stream buffer size must be greater than 0.");
            return Err(ServerError::InvalidConfiguration(
                "limits.max_stream_buffer_size is 0".to_string(),
            ));
        }

        Ok(())
    }
}
