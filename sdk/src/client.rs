use crate::error::DiskPerfError;
use crate::models::disk_usage::DiskUsage;
use crate::models::measurement::{MeasurementRequest, MeasurementResult};
use crate::models::target_directory::TargetDirectory;
use async_trait::async_trait;

/// Request/response channel to the measurement service.
#[async_trait]
pub trait MeasurementClient: Send + Sync {
    /// Performs one timed write with the given parameters.
    async fn measure(&self, request: &MeasurementRequest)
        -> Result<MeasurementResult, DiskPerfError>;

    /// Performs one timed write using the service's default buffer sizes.
    async fn measure_with_defaults(
        &self,
        target_directory: TargetDirectory,
        data_size: u64,
        reserve_length: bool,
    ) -> Result<MeasurementResult, DiskPerfError>;

    /// Returns free/total space of both target directories' volumes.
    async fn get_disk_usage(&self) -> Result<Vec<DiskUsage>, DiskPerfError>;

    async fn ping(&self) -> Result<(), DiskPerfError>;
}
