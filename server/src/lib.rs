pub mod args;
pub mod configs;
pub mod http;
pub mod log;
pub mod measurement;
pub mod server_error;
