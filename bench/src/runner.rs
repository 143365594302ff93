use crate::bench_error::BenchError;
use crate::benchmark_record::BenchmarkRecord;
use crate::matrix::benchmark_case::{BenchmarkCase, MeasurementFunction};
use crate::results_log::ResultsLog;
use diskperf::client::MeasurementClient;
use diskperf::error::DiskPerfError;
use diskperf::models::measurement::MeasurementRequest;
use diskperf::models::stream_buffer_size::StreamBufferSize;
use diskperf::models::target_directory::TargetDirectory;
use std::time::Instant;
use tracing::{error, info};

const WARMUP_SIZE: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub iterations: u32,
    pub start_index: usize,
    pub skip_warmup: bool,
}

/// Runs the matrix sequentially, one outstanding request at a time.
pub struct BenchmarkRunner<'a, C: MeasurementClient + ?Sized> {
    client: &'a C,
    results: ResultsLog,
    settings: RunSettings,
}

impl<'a, C: MeasurementClient + ?Sized> BenchmarkRunner<'a, C> {
    pub fn new(client: &'a C, results: ResultsLog, settings: RunSettings) -> Self {
        Self {
            client,
            results,
            settings,
        }
    }

    /// Runs every combination from the configured start index on.
    ///
    /// Any failed request aborts the run. Records of completed repetitions
    /// are already in the log at that point.
    pub async fn run(&self, matrix: &[BenchmarkCase]) -> Result<(), BenchError> {
        if self.settings.iterations == 0 {
            return Err(BenchError::InvalidIterations(self.settings.iterations));
        }

        if self.settings.start_index > matrix.len() {
            return Err(BenchError::InvalidStartIndex(
                self.settings.start_index,
                matrix.len(),
            ));
        }

        if !self.settings.skip_warmup {
            self.warm_up().await?;
        }

        let tests = matrix.len();
        let iterations = self.settings.iterations;
        info!(
            "Running {} of {} combinations, {} iterations each, results in: {}",
            tests - self.settings.start_index,
            tests,
            iterations,
            self.results.path().display()
        );
        for (index, case) in matrix.iter().enumerate().skip(self.settings.start_index) {
            for iteration in 0..iterations {
                let record = self.execute(case).await.inspect_err(|error| {
                    Self::report_failure(index, case, error);
                })?;
                self.results.append(&record)?;
                info!(
                    "Running test {} of {}, iteration {} of {}... done in {:.3} ms",
                    index + 1,
                    tests,
                    iteration + 1,
                    iterations,
                    record.client_elapsed_ms
                );
            }
        }

        info!("Finished {} combinations.", tests - self.settings.start_index);
        Ok(())
    }

    /// One request per target directory, logged but not recorded.
    async fn warm_up(&self) -> Result<(), BenchError> {
        info!("Warming up...");
        for target_directory in [TargetDirectory::Home, TargetDirectory::Temp] {
            let case = BenchmarkCase::write_perf(MeasurementRequest {
                target_directory,
                data_size: WARMUP_SIZE as u64,
                app_buffer_size: WARMUP_SIZE,
                file_stream_buffer_size: StreamBufferSize::Bytes(WARMUP_SIZE),
                reserve_length: true,
            });
            let record = self.execute(&case).await.inspect_err(|error| {
                error!("Warm-up failed for: {case}, {error}");
            })?;
            info!(
                "Warm-up of {target_directory} done, client: {:.3} ms, server: {:.3} ms",
                record.client_elapsed_ms, record.server_elapsed_ms
            );
        }
        Ok(())
    }

    async fn execute(&self, case: &BenchmarkCase) -> Result<BenchmarkRecord, DiskPerfError> {
        let request = &case.request;
        let started_at = Instant::now();
        let result = match case.function {
            MeasurementFunction::WritePerf => self.client.measure(request).await?,
            MeasurementFunction::Defaults => {
                self.client
                    .measure_with_defaults(
                        request.target_directory,
                        request.data_size,
                        request.reserve_length,
                    )
                    .await?
            }
        };
        let elapsed = started_at.elapsed();
        Ok(BenchmarkRecord::new(case.function, &result, elapsed))
    }

    fn report_failure(index: usize, case: &BenchmarkCase, error: &DiskPerfError) {
        if error.is_server_failure() {
            error!("Server error at test {}: {case}, {error}", index + 1);
        } else {
            error!("Request failed at test {}: {case}, {error}", index + 1);
        }
    }
}
