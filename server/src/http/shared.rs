use crate::measurement::service::MeasurementService;
use std::net::SocketAddr;
use ulid::Ulid;

pub struct AppState {
    pub service: MeasurementService,
    /// `None` when the credential check is disabled.
    pub access_key: Option<String>,
}

#[derive(Debug, Copy, Clone)]
pub struct RequestDetails {
    pub request_id: Ulid,
    pub ip_address: Option<SocketAddr>,
}
