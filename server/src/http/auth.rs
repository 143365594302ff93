use crate::http::shared::AppState;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::{
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

const ACCESS_KEY_PARAM: &str = "code";
const UNAUTHORIZED_PATHS: &[&str] = &["/", "/ping"];

/// Requires the `code` query parameter to match the configured access key.
pub async fn access_key_auth(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(access_key) = &state.access_key else {
        return Ok(next.run(request).await);
    };

    if UNAUTHORIZED_PATHS.contains(&request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(request.uri())
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    match params.get(ACCESS_KEY_PARAM) {
        Some(code) if code == access_key => Ok(next.run(request).await),
        _ => {
            warn!(
                "Rejected a request to: {} with missing or invalid access key.",
                request.uri().path()
            );
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
