use crate::configs::server::ServerConfig;
use crate::server_error::ServerError;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "configs/server.toml";
pub const CONFIG_PATH_ENV_VAR: &str = "DISKPERF_CONFIG_PATH";
const ENV_PREFIX: &str = "DISKPERF_";
const ENV_SEPARATOR: &str = "__";

pub trait ConfigProvider {
    fn load_config(&self) -> Result<ServerConfig, ServerError>;
}

/// Loads built-in defaults, then the TOML file (if present), then
/// `DISKPERF_` prefixed environment variables, e.g. `DISKPERF_HTTP__ADDRESS`.
#[derive(Debug)]
pub struct FileConfigProvider {
    path: String,
}

impl FileConfigProvider {
    pub fn new(path: String) -> Self {
        Self { path }
    }

    /// Resolves the path from an explicit value, then the environment, then the default.
    pub fn resolve(path: Option<String>) -> Self {
        let path = path
            .or_else(|| std::env::var(CONFIG_PATH_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load_config(&self) -> Result<ServerConfig, ServerError> {
        let mut figment = Figment::from(Serialized::defaults(ServerConfig::default()));
        if Path::new(&self.path).is_file() {
            info!("Loading config from path: '{}'...", self.path);
            figment = figment.merge(Toml::file(&self.path));
        } else {
            warn!(
                "Config file: '{}' was not found, using the default config.",
                self.path
            );
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR))
            .extract()
            .map_err(|error| {
                ServerError::CannotLoadConfiguration(format!(
                    "Failed to load configuration: {error}"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_should_fall_back_to_defaults() {
        let provider = FileConfigProvider::new("does/not/exist.toml".to_string());
        let config = provider.load_config().unwrap();
        assert_eq!(config.storage.subdirectory, "diskperf/temp");
        assert_eq!(config.limits.max_data_size, 1024 * 1024 * 1024);
    }

    #[test]
    fn file_values_should_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[http]\naddress = \"127.0.0.1:4000\"\n\n[limits]\nmax_data_size = 2048"
        )
        .unwrap();

        let provider = FileConfigProvider::new(file.path().display().to_string());
        let config = provider.load_config().unwrap();

        assert_eq!(config.http.address, "127.0.0.1:4000");
        assert_eq!(config.limits.max_data_size, 2048);
        assert_eq!(config.http.access_key, "");
    }

    #[test]
    fn malformed_file_should_be_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[limits]\nmax_data_size = \"lots\"").unwrap();

        let provider = FileConfigProvider::new(file.path().display().to_string());
        assert!(matches!(
            provider.load_config(),
            Err(ServerError::CannotLoadConfiguration(_))
        ));
    }
}
