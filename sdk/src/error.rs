use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiskPerfError {
    #[error("Missing parameter: {0}")]
    MissingParameter(String),
    #[error("Invalid value: '{1}' for parameter: {0}")]
    InvalidParameter(String, String),
    #[error("Invalid target directory: {0}")]
    InvalidTargetDirectory(String),
    #[error("Invalid app buffer size: {0}, it must be greater than 0")]
    InvalidAppBufferSize(u32),
    #[error("Invalid file stream buffer size: {0}, use -1 to match the app buffer size")]
    InvalidStreamBufferSize(i64),
    #[error("Data size: {0} exceeds the limit of {1} bytes")]
    DataSizeTooLarge(u64, u64),
    #[error("App buffer size: {0} exceeds the limit of {1} bytes")]
    AppBufferSizeTooLarge(u32, u32),
    #[error("File stream buffer size: {0} exceeds the limit of {1} bytes")]
    StreamBufferSizeTooLarge(u32, u32),
    #[error("Cannot parse URL: {0}")]
    CannotParseUrl(String),
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("Server failure, status: {status}, reason: {reason}")]
    ServerFailure { status: u16, reason: String },
    #[error("Request rejected, status: {status}, reason: {reason}")]
    RequestRejected { status: u16, reason: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl DiskPerfError {
    pub fn as_code(&self) -> &'static str {
        match self {
            DiskPerfError::MissingParameter(_) => "missing_parameter",
            DiskPerfError::InvalidParameter(_, _) => "invalid_parameter",
            DiskPerfError::InvalidTargetDirectory(_) => "invalid_target_directory",
            DiskPerfError::InvalidAppBufferSize(_) => "invalid_app_buffer_size",
            DiskPerfError::InvalidStreamBufferSize(_) => "invalid_stream_buffer_size",
            DiskPerfError::DataSizeTooLarge(_, _) => "data_size_too_large",
            DiskPerfError::AppBufferSizeTooLarge(_, _) => "app_buffer_size_too_large",
            DiskPerfError::StreamBufferSizeTooLarge(_, _) => "stream_buffer_size_too_large",
            DiskPerfError::CannotParseUrl(_) => "cannot_parse_url",
            DiskPerfError::RequestError(_) => "request_error",
            DiskPerfError::ServerFailure { .. } => "server_failure",
            DiskPerfError::RequestRejected { .. } => "request_rejected",
            DiskPerfError::InvalidResponse(_) => "invalid_response",
        }
    }

    /// Errors caused by the caller's parameters, detected before any I/O.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DiskPerfError::MissingParameter(_)
                | DiskPerfError::InvalidParameter(_, _)
                | DiskPerfError::InvalidTargetDirectory(_)
                | DiskPerfError::InvalidAppBufferSize(_)
                | DiskPerfError::InvalidStreamBufferSize(_)
                | DiskPerfError::DataSizeTooLarge(_, _)
                | DiskPerfError::AppBufferSizeTooLarge(_, _)
                | DiskPerfError::StreamBufferSizeTooLarge(_, _)
        )
    }

    pub fn is_server_failure(&self) -> bool {
        matches!(self, DiskPerfError::ServerFailure { .. })
    }
}

/// Body returned by the service for every non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub reason: String,
}

impl ErrorResponse {
    pub fn new(code: &str, reason: impl ToString) -> Self {
        ErrorResponse {
            code: code.to_string(),
            reason: reason.to_string(),
        }
    }
}
