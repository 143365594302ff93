use crate::matrix::benchmark_case::{BenchmarkCase, MeasurementFunction};
use diskperf::models::measurement::MeasurementRequest;
use diskperf::models::stream_buffer_size::StreamBufferSize;
use diskperf::models::target_directory::TargetDirectory;

/// Dimensions of the benchmark matrix, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpace {
    pub functions: Vec<MeasurementFunction>,
    pub target_directories: Vec<TargetDirectory>,
    pub reserve_lengths: Vec<bool>,
    pub app_buffer_sizes: Vec<u32>,
    pub stream_buffer_sizes: Vec<StreamBufferSize>,
    pub data_sizes: Vec<u64>,
}

impl ParameterSpace {
    /// Cartesian product of all dimensions, duplicates included.
    ///
    /// The defaults function does not vary buffer sizes, so it contributes one
    /// case per target directory, reserve flag and data size.
    pub fn combinations(&self) -> Vec<BenchmarkCase> {
        let mut combinations = Vec::new();
        for &function in &self.functions {
            for &target_directory in &self.target_directories {
                for &reserve_length in &self.reserve_lengths {
                    match function {
                        MeasurementFunction::WritePerf => self.write_perf_cases(
                            target_directory,
                            reserve_length,
                            &mut combinations,
                        ),
                        MeasurementFunction::Defaults => {
                            for &data_size in &self.data_sizes {
                                combinations.push(BenchmarkCase::new(
                                    function,
                                    MeasurementRequest::with_defaults(
                                        target_directory,
                                        data_size,
                                        reserve_length,
                                    ),
                                ));
                            }
                        }
                    }
                }
            }
        }
        combinations
    }

    fn write_perf_cases(
        &self,
        target_directory: TargetDirectory,
        reserve_length: bool,
        combinations: &mut Vec<BenchmarkCase>,
    ) {
        for &app_buffer_size in &self.app_buffer_sizes {
            for &file_stream_buffer_size in &self.stream_buffer_sizes {
                for &data_size in &self.data_sizes {
                    combinations.push(BenchmarkCase::write_perf(MeasurementRequest {
                        target_directory,
                        data_size,
                        app_buffer_size,
                        file_stream_buffer_size,
                        reserve_length,
                    }));
                }
            }
        }
    }
}

/// `0`, `base / 2`, then `base` doubled while it stays within `ceiling`.
pub fn data_sizes(base: u64, ceiling: u64) -> Vec<u64> {
    let mut sizes = vec![0];
    if base == 0 {
        return sizes;
    }

    if base / 2 > 0 && base / 2 <= ceiling {
        sizes.push(base / 2);
    }
    let mut size = base;
    while size <= ceiling {
        sizes.push(size);
        size = match size.checked_mul(2) {
            Some(next) => next,
            None => break,
        };
    }
    sizes
}
