use diskperf::error::DiskPerfError;
use std::path::PathBuf;
use thiserror::Error;
use tokio::io;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error")]
    IoError(#[from] io::Error),
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Logging initialization failure: {0}")]
    LoggingInitFailure(String),
    #[error("Cannot create directory: {0}")]
    CannotCreateDirectory(PathBuf, #[source] io::Error),
    #[error("Cannot create file in directory: {0}")]
    CannotCreateFile(PathBuf, #[source] io::Error),
    #[error("Cannot delete file: {0}")]
    CannotDeleteFile(PathBuf, #[source] io::Error),
    #[error("Cannot read disk usage of: {0}, reason: {1}")]
    CannotReadDiskUsage(PathBuf, String),
    #[error(transparent)]
    DiskPerf(#[from] DiskPerfError),
}

impl ServerError {
    pub fn as_code(&self) -> &'static str {
        match self {
            ServerError::IoError(_) => "io_error",
            ServerError::CannotLoadConfiguration(_) => "cannot_load_configuration",
            ServerError::InvalidConfiguration(_) => "invalid_configuration",
            ServerError::LoggingInitFailure(_) => "logging_init_failure",
            ServerError::CannotCreateDirectory(_, _) => "cannot_create_directory",
            ServerError::CannotCreateFile(_, _) => "cannot_create_file",
            ServerError::CannotDeleteFile(_, _) => "cannot_delete_file",
            ServerError::CannotReadDiskUsage(_, _) => "cannot_read_disk_usage",
            ServerError::DiskPerf(error) => error.as_code(),
        }
    }
}
