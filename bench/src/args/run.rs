use super::defaults::*;
use crate::matrix::benchmark_case::MeasurementFunction;
use crate::matrix::parameter_space::{data_sizes, ParameterSpace};
use clap::{Args, ValueEnum};
use diskperf::models::stream_buffer_size::StreamBufferSize;
use diskperf::models::target_directory::TargetDirectory;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Repetitions of every parameter combination
    #[arg(long, short = 'i', default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Zero-based index of the first combination to run, used to resume
    #[arg(long, short = 's', default_value_t = DEFAULT_START_INDEX)]
    pub start_index: usize,

    /// CSV file the results are appended to
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Service endpoints to measure, `defaults` uses the service's buffer sizes
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = [MeasurementFunction::WritePerf])]
    pub functions: Vec<MeasurementFunction>,

    /// Target directories to write into
    #[arg(long, value_delimiter = ',', default_values_t = [TargetDirectory::Temp, TargetDirectory::Home])]
    pub target_dirs: Vec<TargetDirectory>,

    /// App buffer sizes in bytes
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_APP_BUFFER_SIZES)]
    pub app_buffer_sizes: Vec<u32>,

    /// Stream buffer sizes in bytes, `app` matches the app buffer size
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [StreamBufferSize::Bytes(4096), StreamBufferSize::MatchAppBuffer])]
    pub stream_buffer_sizes: Vec<StreamBufferSize>,

    /// Whether the file length is reserved before writing
    #[arg(long, value_enum, default_value_t = ReserveLengthMode::Both)]
    pub reserve_lengths: ReserveLengthMode,

    /// Base unit of the data size sequence, in bytes
    #[arg(long, default_value_t = DEFAULT_MIN_DATA_SIZE)]
    pub min_data_size: u64,

    /// Largest data size, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_DATA_SIZE)]
    pub max_data_size: u64,

    /// Skip the unrecorded warm-up requests
    #[arg(long, default_value_t = false)]
    pub skip_warmup: bool,

    /// Print the indexed matrix and exit without sending requests
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveLengthMode {
    Both,
    Reserve,
    NoReserve,
}

impl ReserveLengthMode {
    pub fn values(&self) -> Vec<bool> {
        match self {
            ReserveLengthMode::Both => vec![true, false],
            ReserveLengthMode::Reserve => vec![true],
            ReserveLengthMode::NoReserve => vec![false],
        }
    }
}

impl RunArgs {
    pub fn parameter_space(&self) -> ParameterSpace {
        ParameterSpace {
            functions: self.functions.clone(),
            target_directories: self.target_dirs.clone(),
            reserve_lengths: self.reserve_lengths.values(),
            app_buffer_sizes: self.app_buffer_sizes.clone(),
            stream_buffer_sizes: self.stream_buffer_sizes.clone(),
            data_sizes: data_sizes(self.min_data_size, self.max_data_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::args::common::{BenchArgs, BenchCommand};
    use crate::matrix::benchmark_case::MeasurementFunction;
    use clap::Parser;
    use diskperf::models::stream_buffer_size::StreamBufferSize;
    use diskperf::models::target_directory::TargetDirectory;

    fn run_args(extra: &[&str]) -> super::RunArgs {
        let mut argv = vec!["diskperf-bench", "run"];
        argv.extend_from_slice(extra);
        match BenchArgs::try_parse_from(argv).unwrap().command {
            BenchCommand::Run(args) => args,
            command => panic!("unexpected command: {command:?}"),
        }
    }

    #[test]
    fn defaults_should_describe_full_matrix() {
        let space = run_args(&[]).parameter_space();

        assert_eq!(space.functions, vec![MeasurementFunction::WritePerf]);
        assert_eq!(
            space.target_directories,
            vec![TargetDirectory::Temp, TargetDirectory::Home]
        );
        assert_eq!(space.reserve_lengths, vec![true, false]);
        assert_eq!(space.app_buffer_sizes, vec![4096, 65536, 1048576, 4194304]);
        assert_eq!(
            space.stream_buffer_sizes,
            vec![StreamBufferSize::Bytes(4096), StreamBufferSize::MatchAppBuffer]
        );
        assert_eq!(space.data_sizes.first(), Some(&0));
        assert_eq!(space.data_sizes.last(), Some(&(256 * 1024 * 1024)));
    }

    #[test]
    fn comma_separated_lists_should_be_parsed() {
        let args = run_args(&[
            "--functions",
            "write-perf,defaults",
            "--target-dirs",
            "home",
            "--app-buffer-sizes",
            "512,1024",
            "--stream-buffer-sizes",
            "app,-1,8192",
            "--reserve-lengths",
            "no-reserve",
            "--start-index",
            "7",
        ]);

        assert_eq!(
            args.functions,
            vec![MeasurementFunction::WritePerf, MeasurementFunction::Defaults]
        );
        assert_eq!(args.target_dirs, vec![TargetDirectory::Home]);
        assert_eq!(args.app_buffer_sizes, vec![512, 1024]);
        assert_eq!(
            args.stream_buffer_sizes,
            vec![
                StreamBufferSize::MatchAppBuffer,
                StreamBufferSize::MatchAppBuffer,
                StreamBufferSize::Bytes(8192)
            ]
        );
        assert_eq!(args.parameter_space().reserve_lengths, vec![false]);
        assert_eq!(args.start_index, 7);
    }
}
