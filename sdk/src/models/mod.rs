pub mod disk_usage;
pub mod measurement;
pub mod query;
pub mod stream_buffer_size;
pub mod target_directory;
