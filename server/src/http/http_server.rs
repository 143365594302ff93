use crate::configs::http::HttpConfig;
use crate::http::shared::AppState;
use crate::http::{auth, diagnostics, measurement, system};
use crate::measurement::service::MeasurementService;
use crate::server_error::ServerError;
use axum::{middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub async fn start(config: HttpConfig, service: MeasurementService) -> Result<(), ServerError> {
    let app = router(build_app_state(&config, service));
    let listener = TcpListener::bind(&config.address).await?;
    info!("Started HTTP API on: {:?}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    info!("HTTP API has been stopped.");
    Ok(())
}

pub fn build_app_state(config: &HttpConfig, service: MeasurementService) -> Arc<AppState> {
    let access_key = if config.access_key.is_empty() {
        None
    } else {
        Some(config.access_key.clone())
    };

    Arc::new(AppState {
        service,
        access_key,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(system::router())
        .merge(measurement::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::access_key_auth,
        ))
        .layer(middleware::from_fn(diagnostics::request_diagnostics))
        .with_state(state)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received a shutdown signal, stopping the HTTP API...");
    }
}
