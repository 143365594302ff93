pub mod auth;
pub mod diagnostics;
pub mod error;
pub mod http_server;
pub mod measurement;
pub mod shared;
pub mod system;
