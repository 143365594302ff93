use crate::configs::system::StorageConfig;
use crate::server_error::ServerError;
use diskperf::models::target_directory::TargetDirectory;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Maps a target directory class to the base path it lives under.
///
/// `Home` uses the home variable when it is set to a non-blank value and falls
/// back to the temp base otherwise. The returned class is the one actually used.
pub fn resolve_base(
    target_directory: TargetDirectory,
    home: Option<String>,
    temp: &Path,
) -> (TargetDirectory, PathBuf) {
    match (target_directory, home) {
        (TargetDirectory::Home, Some(home)) if !home.trim().is_empty() => {
            (TargetDirectory::Home, PathBuf::from(home))
        }
        _ => (TargetDirectory::Temp, temp.to_path_buf()),
    }
}

#[derive(Debug, Clone)]
pub struct TargetDirectoryResolver {
    subdirectory: PathBuf,
    home_env_var: String,
    temp_path: Option<PathBuf>,
}

impl TargetDirectoryResolver {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            subdirectory: PathBuf::from(&config.subdirectory),
            home_env_var: config.home_env_var.clone(),
            temp_path: if config.temp_path.is_empty() {
                None
            } else {
                Some(PathBuf::from(&config.temp_path))
            },
        }
    }

    /// Returns the effective class and an absolute, existing directory path.
    pub async fn resolve(
        &self,
        target_directory: TargetDirectory,
    ) -> Result<(TargetDirectory, PathBuf), ServerError> {
        let temp = self.temp_path.clone().unwrap_or_else(std::env::temp_dir);
        let home = std::env::var(&self.home_env_var).ok();
        let (effective, base) = resolve_base(target_directory, home, &temp);
        let directory = base.join(&self.subdirectory);

        tokio::fs::create_dir_all(&directory)
            .await
            .map_err(|error| ServerError::CannotCreateDirectory(directory.clone(), error))?;
        let directory = tokio::fs::canonicalize(&directory)
            .await
            .map_err(|error| ServerError::CannotCreateDirectory(directory.clone(), error))?;

        debug!(
            "Resolved target directory: {target_directory} as {effective} at: {}",
            directory.display()
        );
        Ok((effective, directory))
    }
}
