use crate::http::shared::RequestDetails;
use axum::body::Body;
use axum::{
    extract::ConnectInfo,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tokio::time::Instant;
use tracing::{debug, error};
use ulid::Ulid;

pub async fn request_diagnostics(mut request: Request<Body>, next: Next) -> Response {
    let request_id = Ulid::new();
    let ip_address = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(address)| *address);
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    debug!("Processing a request {method} {path} with ID: {request_id} from: {ip_address:?}...");
    request.extensions_mut().insert(RequestDetails {
        request_id,
        ip_address,
    });

    let now = Instant::now();
    let response = next.run(request).await;
    let status = response.status();
    if status != StatusCode::NOT_FOUND && status >= StatusCode::BAD_REQUEST {
        error!("Returning an invalid status code: {status} for request {method} {path} with ID: {request_id}");
    }

    debug!(
        "Processed a request with ID: {request_id} in {} ms.",
        now.elapsed().as_millis()
    );
    response
}
