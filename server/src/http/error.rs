use crate::server_error::ServerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use diskperf::error::{DiskPerfError, ErrorResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error(transparent)]
    Error(#[from] ServerError),
}

impl From<DiskPerfError> for CustomError {
    fn from(error: DiskPerfError) -> Self {
        CustomError::Error(ServerError::DiskPerf(error))
    }
}

impl IntoResponse for CustomError {
    fn into_response(self) -> Response {
        match self {
            CustomError::Error(error) => {
                let status_code = match &error {
                    ServerError::DiskPerf(error) if error.is_validation_error() => {
                        StatusCode::BAD_REQUEST
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let body = ErrorResponse::new(error.as_code(), &error);
                (status_code, Json(body))
            }
        }
        .into_response()
    }
}
