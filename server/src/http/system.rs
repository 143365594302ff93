use crate::http::error::CustomError;
use crate::http::shared::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use diskperf::models::disk_usage::DiskUsage;
use std::sync::Arc;

const NAME: &str = "diskperf";
const PONG: &str = "pong";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(|| async { NAME }))
        .route("/ping", get(|| async { PONG }))
        .route("/disk-usage", get(get_disk_usage))
}

async fn get_disk_usage(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DiskUsage>>, CustomError> {
    let usage = state.service.disk_usage().await?;
    Ok(Json(usage))
}
