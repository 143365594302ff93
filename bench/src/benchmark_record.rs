use crate::matrix::benchmark_case::MeasurementFunction;
use diskperf::models::measurement::{MeasurementRequest, MeasurementResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// One repetition of one combination, as appended to the results log.
///
/// The parameters are the ones the service reports using, so a stream buffer
/// sentinel appears resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub id: Uuid,
    pub function: MeasurementFunction,
    pub request: MeasurementRequest,
    pub client_elapsed_ms: f64,
    pub server_elapsed_ms: f64,
}

impl BenchmarkRecord {
    pub fn new(
        function: MeasurementFunction,
        result: &MeasurementResult,
        client_elapsed: Duration,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            function,
            request: result.effective_request(),
            client_elapsed_ms: client_elapsed.as_secs_f64() * 1000.0,
            server_elapsed_ms: result.elapsed_ms,
        }
    }

    pub fn to_row(&self) -> BenchmarkRow {
        BenchmarkRow {
            id: self.id,
            function: self.function,
            target_dir: self.request.target_directory.to_string(),
            data_size: self.request.data_size,
            app_buffer_size: self.request.app_buffer_size,
            file_stream_buffer_size: self.request.resolved_stream_buffer_size(),
            reserve_length: self.request.reserve_length,
            client_elapsed_ms: self.client_elapsed_ms,
            server_elapsed_ms: self.server_elapsed_ms,
        }
    }
}

/// Flat CSV form of a [`BenchmarkRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub id: Uuid,
    pub function: MeasurementFunction,
    pub target_dir: String,
    pub data_size: u64,
    pub app_buffer_size: u32,
    pub file_stream_buffer_size: u32,
    pub reserve_length: bool,
    pub client_elapsed_ms: f64,
    pub server_elapsed_ms: f64,
}
