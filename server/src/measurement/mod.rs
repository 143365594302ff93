pub mod disk_usage;
pub mod payload;
pub mod service;
pub mod target_directory;
pub mod writer;
