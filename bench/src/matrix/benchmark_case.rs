use clap::ValueEnum;
use diskperf::models::measurement::{MeasurementKey, MeasurementRequest};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Service endpoint a combination is measured with.
///
/// `Defaults` ignores the requested buffer sizes and lets the service apply
/// its default app and stream buffers.
#[derive(
    ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementFunction {
    WritePerf,
    Defaults,
}

impl Display for MeasurementFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementFunction::WritePerf => write!(f, "write-perf"),
            MeasurementFunction::Defaults => write!(f, "defaults"),
        }
    }
}

/// One entry of the benchmark matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkCase {
    pub function: MeasurementFunction,
    pub request: MeasurementRequest,
}

impl BenchmarkCase {
    pub fn new(function: MeasurementFunction, request: MeasurementRequest) -> Self {
        Self { function, request }
    }

    pub fn write_perf(request: MeasurementRequest) -> Self {
        Self::new(MeasurementFunction::WritePerf, request)
    }

    /// Resolved parameters first, so both functions of the same write sort
    /// next to each other.
    pub fn key(&self) -> (MeasurementKey, MeasurementFunction) {
        (self.request.key(), self.function)
    }
}

impl Display for BenchmarkCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "function: {}, {}", self.function, self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diskperf::models::target_directory::TargetDirectory;

    #[test]
    fn same_write_through_different_functions_should_have_distinct_keys() {
        let request = MeasurementRequest::with_defaults(TargetDirectory::Temp, 4096, true);
        let write_perf = BenchmarkCase::write_perf(request);
        let defaults = BenchmarkCase::new(MeasurementFunction::Defaults, request);

        assert_ne!(write_perf.key(), defaults.key());
        assert!(defaults.key() > write_perf.key());
    }

    #[test]
    fn function_should_be_parsed_from_cli_name() {
        assert_eq!(
            MeasurementFunction::from_str("write-perf", false).unwrap(),
            MeasurementFunction::WritePerf
        );
        assert_eq!(
            MeasurementFunction::from_str("defaults", false).unwrap(),
            MeasurementFunction::Defaults
        );
        assert_eq!(MeasurementFunction::Defaults.to_string(), "defaults");
    }
}
