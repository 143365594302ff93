use crate::configs::system::{LimitsConfig, StorageConfig};
use crate::measurement::disk_usage::volume_space;
use crate::measurement::payload::{BufferPool, PayloadStream, PAYLOAD_BLOCK_SIZE};
use crate::measurement::target_directory::TargetDirectoryResolver;
use crate::measurement::writer::write_payload;
use crate::server_error::ServerError;
use diskperf::error::DiskPerfError;
use diskperf::models::disk_usage::DiskUsage;
use diskperf::models::measurement::{MeasurementRequest, MeasurementResult};
use diskperf::models::target_directory::TargetDirectory;
use diskperf::validatable::Validatable;
use strum::IntoEnumIterator;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::time::Instant;
use tracing::{debug, error};

const FILE_PREFIX: &str = "write-";

/// Performs single-shot timed writes into the temp or home volume.
#[derive(Debug, Clone)]
pub struct MeasurementService {
    resolver: TargetDirectoryResolver,
    limits: LimitsConfig,
    pool: BufferPool,
}

impl MeasurementService {
    pub fn new(storage: &StorageConfig, limits: &LimitsConfig) -> Self {
        Self {
            resolver: TargetDirectoryResolver::new(storage),
            limits: limits.clone(),
            pool: BufferPool::new(PAYLOAD_BLOCK_SIZE, limits.pooled_payload_buffers),
        }
    }

    /// Writes `data_size` pseudo-random bytes into a fresh file and reports how
    /// long the writes took, from the first write until the file was closed.
    ///
    /// The file is removed after the timer stops, on success and on failure.
    pub async fn measure(
        &self,
        request: &MeasurementRequest,
    ) -> Result<MeasurementResult, ServerError> {
        self.validate(request)?;
        let app_buffer_size = request.app_buffer_size;
        let stream_buffer_size = request.resolved_stream_buffer_size();
        let (target_directory, directory) =
            self.resolver.resolve(request.target_directory).await?;

        let temp_file = tempfile::Builder::new()
            .prefix(FILE_PREFIX)
            .tempfile_in(&directory)
            .map_err(|error| ServerError::CannotCreateFile(directory.clone(), error))?;
        let (file, temp_path) = temp_file.into_parts();
        let generated_path = temp_path.to_path_buf();
        let file = File::from_std(file);

        if request.reserve_length {
            file.set_len(request.data_size).await?;
        }

        let mut payload = PayloadStream::new(self.pool.clone(), request.data_size);
        let mut writer = BufWriter::with_capacity(stream_buffer_size as usize, file);

        let started_at = Instant::now();
        let stats = write_payload(
            &mut payload,
            &mut writer,
            request.data_size,
            app_buffer_size as usize,
        )
        .await?;
        writer.shutdown().await?;
        drop(writer.into_inner().into_std().await);
        let elapsed = started_at.elapsed();
        drop(payload);

        temp_path.close().map_err(|error| {
            error!(
                "Cannot delete measurement file: {}",
                generated_path.display()
            );
            ServerError::CannotDeleteFile(generated_path.clone(), error)
        })?;

        debug!(
            "Wrote {} bytes in {} writes to: {} in {} ms.",
            stats.bytes,
            stats.writes,
            generated_path.display(),
            elapsed.as_secs_f64() * 1000.0
        );

        Ok(MeasurementResult {
            target_directory,
            generated_path: generated_path.display().to_string(),
            data_size: request.data_size,
            app_buffer_size,
            file_stream_buffer_size: stream_buffer_size,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            reserve_length: request.reserve_length,
        })
    }

    /// Same as [`measure`](Self::measure) with the default buffer sizes.
    pub async fn measure_with_defaults(
        &self,
        target_directory: TargetDirectory,
        data_size: u64,
        reserve_length: bool,
    ) -> Result<MeasurementResult, ServerError> {
        let request = MeasurementRequest::with_defaults(target_directory, data_size, reserve_length);
        self.measure(&request).await
    }

    pub async fn disk_usage(&self) -> Result<Vec<DiskUsage>, ServerError> {
        let mut usage = Vec::new();
        for requested in TargetDirectory::iter() {
            let (target_directory, directory) = self.resolver.resolve(requested).await?;
            let space = volume_space(&directory)?;
            usage.push(DiskUsage {
                target_directory,
                path: directory.display().to_string(),
                free_bytes: space.free_bytes,
                total_bytes: space.total_bytes,
            });
        }
        Ok(usage)
    }

    fn validate(&self, request: &MeasurementRequest) -> Result<(), DiskPerfError> {
        request.validate()?;
        if request.data_size > self.limits.max_data_size {
            return Err(DiskPerfError::DataSizeTooLarge(
                request.data_size,
                self.limits.max_data_size,
            ));
        }

        if request.app_buffer_size > self.limits.max_app_buffer_size {
            return Err(DiskPerfError::AppBufferSizeTooLarge(
                request.app_buffer_size,
                self.limits.max_app_buffer_size,
            ));
        }

        let stream_buffer_size = request.resolved_stream_buffer_size();
        if stream_buffer_size > self.limits.max_stream_buffer_size {
            return Err(DiskPerfError::StreamBufferSizeTooLarge(
                stream_buffer_size,
                self.limits.max_stream_buffer_size,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diskperf::models::stream_buffer_size::StreamBufferSize;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const UNSET_HOME_VARIABLE: &str = "DISKPERF_TEST_UNSET_HOME_VARIABLE";

    fn service(base: &Path, limits: LimitsConfig) -> MeasurementService {
        let storage = StorageConfig {
            subdirectory: "diskperf/temp".to_string(),
            home_env_var: UNSET_HOME_VARIABLE.to_string(),
            temp_path: base.display().to_string(),
        };
        MeasurementService::new(&storage, &limits)
    }

    fn measurement_directory(base: &TempDir) -> PathBuf {
        base.path().join("diskperf/temp")
    }

    fn files_in(directory: &Path) -> usize {
        std::fs::read_dir(directory).unwrap().count()
    }

    fn request(data_size: u64, app_buffer_size: u32, stream: StreamBufferSize) -> MeasurementRequest {
        MeasurementRequest {
            target_directory: TargetDirectory::Temp,
            data_size,
            app_buffer_size,
            file_stream_buffer_size: stream,
            reserve_length: false,
        }
    }

    #[tokio::test]
    async fn measurement_should_write_and_remove_file() {
        let base = tempfile::tempdir().unwrap();
        let service = service(base.path(), LimitsConfig::default());

        let result = service
            .measure(&request(256 * 1024, 4096, StreamBufferSize::Bytes(8192)))
            .await
            .unwrap();

        assert_eq!(result.target_directory, TargetDirectory::Temp);
        assert_eq!(result.data_size, 256 * 1024);
        assert_eq!(result.app_buffer_size, 4096);
        assert_eq!(result.file_stream_buffer_size, 8192);
        assert!(result.elapsed_ms >= 0.0);
        assert!(!Path::new(&result.generated_path).exists());
        assert_eq!(files_in(&measurement_directory(&base)), 0);
    }

    #[tokio::test]
    async fn sentinel_should_be_reported_as_app_buffer_size() {
        let base = tempfile::tempdir().unwrap();
        let service = service(base.path(), LimitsConfig::default());

        let result = service
            .measure(&request(1024, 65536, StreamBufferSize::MatchAppBuffer))
            .await
            .unwrap();

        assert_eq!(result.file_stream_buffer_size, 65536);
    }

    #[tokio::test]
    async fn zero_data_size_should_complete_with_non_negative_elapsed_time() {
        let base = tempfile::tempdir().unwrap();
        let service = service(base.path(), LimitsConfig::default());

        let result = service
            .measure(&MeasurementRequest {
                reserve_length: true,
                ..request(0, 4096, StreamBufferSize::Bytes(4096))
            })
            .await
            .unwrap();

        assert_eq!(result.data_size, 0);
        assert!(result.elapsed_ms >= 0.0);
        assert!(result.reserve_length);
    }

    #[tokio::test]
    async fn home_should_fall_back_to_temp_when_home_is_not_set() {
        let base = tempfile::tempdir().unwrap();
        let service = service(base.path(), LimitsConfig::default());

        let result = service
            .measure(&MeasurementRequest {
                target_directory: TargetDirectory::Home,
                ..request(10, 4096, StreamBufferSize::Bytes(4096))
            })
            .await
            .unwrap();

        assert_eq!(result.target_directory, TargetDirectory::Temp);
    }

    #[tokio::test]
    async fn failed_measurement_should_not_leave_file_behind() {
        let base = tempfile::tempdir().unwrap();
        let limits = LimitsConfig {
            max_data_size: u64::MAX,
            ..LimitsConfig::default()
        };
        let service = service(base.path(), limits);

        // The reservation fails because the length does not fit a file offset.
        let result = service
            .measure(&MeasurementRequest {
                reserve_length: true,
                ..request(u64::MAX, 4096, StreamBufferSize::Bytes(4096))
            })
            .await;

        assert!(matches!(result, Err(ServerError::IoError(_))));
        assert_eq!(files_in(&measurement_directory(&base)), 0);
    }

    #[tokio::test]
    async fn request_above_limits_should_be_rejected_before_any_io() {
        let base = tempfile::tempdir().unwrap();
        let limits = LimitsConfig {
            max_data_size: 1024,
            max_app_buffer_size: 4096,
            ..LimitsConfig::default()
        };
        let service = service(base.path(), limits);

        let too_much_data = service
            .measure(&request(2048, 4096, StreamBufferSize::Bytes(4096)))
            .await;
        let too_large_buffer = service
            .measure(&request(10, 8192, StreamBufferSize::Bytes(4096)))
            .await;

        assert!(matches!(
            too_much_data,
            Err(ServerError::DiskPerf(DiskPerfError::DataSizeTooLarge(2048, 1024)))
        ));
        assert!(matches!(
            too_large_buffer,
            Err(ServerError::DiskPerf(DiskPerfError::AppBufferSizeTooLarge(8192, 4096)))
        ));
        assert!(!measurement_directory(&base).exists());
    }

    #[tokio::test]
    async fn stream_buffer_above_limit_should_be_rejected_before_any_io() {
        let base = tempfile::tempdir().unwrap();
        let limits = LimitsConfig {
            max_data_size: 1024,
            max_app_buffer_size: 1024 * 1024,
            max_stream_buffer_size: 4096,
            ..LimitsConfig::default()
        };
        let service = service(base.path(), limits);

        let explicit = service
            .measure(&request(10, 4096, StreamBufferSize::Bytes(u32::MAX)))
            .await;
        let sentinel = service
            .measure(&request(10, 65536, StreamBufferSize::MatchAppBuffer))
            .await;

        assert!(matches!(
            explicit,
            Err(ServerError::DiskPerf(DiskPerfError::StreamBufferSizeTooLarge(u32::MAX, 4096)))
        ));
        assert!(matches!(
            sentinel,
            Err(ServerError::DiskPerf(DiskPerfError::StreamBufferSizeTooLarge(65536, 4096)))
        ));
        assert!(!measurement_directory(&base).exists());
    }

    #[tokio::test]
    async fn default_variant_should_use_default_buffer_sizes() {
        let base = tempfile::tempdir().unwrap();
        let service = service(base.path(), LimitsConfig::default());

        let result = service
            .measure_with_defaults(TargetDirectory::Temp, 100_000, false)
            .await
            .unwrap();

        assert_eq!(result.app_buffer_size, 81920);
        assert_eq!(result.file_stream_buffer_size, 4096);
        assert_eq!(files_in(&measurement_directory(&base)), 0);
    }

    #[tokio::test]
    async fn disk_usage_should_cover_both_target_directories() {
        let base = tempfile::tempdir().unwrap();
        let service = service(base.path(), LimitsConfig::default());

        let usage = service.disk_usage().await.unwrap();

        assert_eq!(usage.len(), 2);
        for entry in usage {
            assert!(entry.total_bytes > 0);
            assert!(entry.free_bytes <= entry.total_bytes);
        }
    }
}
