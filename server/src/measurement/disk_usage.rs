use crate::server_error::ServerError;
use nix::sys::statvfs::statvfs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeSpace {
    pub free_bytes: u64,
    pub total_bytes: u64,
}

/// Space of the volume containing `path`, as seen by an unprivileged user.
pub fn volume_space(path: &Path) -> Result<VolumeSpace, ServerError> {
    let stats = statvfs(path)
        .map_err(|error| ServerError::CannotReadDiskUsage(path.to_path_buf(), error.to_string()))?;
    let fragment_size = stats.fragment_size() as u64;
    Ok(VolumeSpace {
        free_bytes: stats.blocks_available() as u64 * fragment_size,
        total_bytes: stats.blocks() as u64 * fragment_size,
    })
}
