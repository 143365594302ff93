pub mod config_provider;
pub mod defaults;
pub mod displays;
pub mod http;
pub mod server;
pub mod system;
pub mod validators;
