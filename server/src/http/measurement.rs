use crate::http::error::CustomError;
use crate::http::shared::{AppState, RequestDetails};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use diskperf::models::measurement::{MeasurementRequest, MeasurementResult};
use diskperf::models::query::QueryParams;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/write-perf", get(measure))
        .route("/write-perf/defaults", get(measure_with_defaults))
}

async fn measure(
    State(state): State<Arc<AppState>>,
    Extension(details): Extension<RequestDetails>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MeasurementResult>, CustomError> {
    let request = MeasurementRequest::from_query(&QueryParams::new(&params))?;
    debug!("Measuring {request}, request ID: {}", details.request_id);
    let result = state.service.measure(&request).await.inspect_err(|error| {
        error!(
            "Measurement failed for {request}, request ID: {}, error: {error}",
            details.request_id
        )
    })?;
    Ok(Json(result))
}

async fn measure_with_defaults(
    State(state): State<Arc<AppState>>,
    Extension(details): Extension<RequestDetails>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MeasurementResult>, CustomError> {
    let request = MeasurementRequest::defaults_from_query(&QueryParams::new(&params))?;
    debug!(
        "Measuring with default buffers {request}, request ID: {}",
        details.request_id
    );
    let result = state
        .service
        .measure_with_defaults(
            request.target_directory,
            request.data_size,
            request.reserve_length,
        )
        .await?;
    Ok(Json(result))
}
