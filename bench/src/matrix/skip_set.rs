use diskperf::models::measurement::{MeasurementKey, MeasurementRequest};
use diskperf::models::stream_buffer_size::StreamBufferSize;
use diskperf::models::target_directory::TargetDirectory;
use std::collections::HashSet;

const MIB: u64 = 1024 * 1024;

/// Home volume writes with small buffers that outlive the gateway timeout.
const KNOWN_TIMEOUTS: [MeasurementRequest; 4] = [
    small_buffer_home_write(256 * MIB, StreamBufferSize::Bytes(4096), true),
    small_buffer_home_write(256 * MIB, StreamBufferSize::MatchAppBuffer, false),
    small_buffer_home_write(128 * MIB, StreamBufferSize::Bytes(4096), false),
    small_buffer_home_write(128 * MIB, StreamBufferSize::MatchAppBuffer, true),
];

const fn small_buffer_home_write(
    data_size: u64,
    file_stream_buffer_size: StreamBufferSize,
    reserve_length: bool,
) -> MeasurementRequest {
    MeasurementRequest {
        target_directory: TargetDirectory::Home,
        data_size,
        app_buffer_size: 4096,
        file_stream_buffer_size,
        reserve_length,
    }
}

/// Combinations excluded from the matrix, compared on resolved parameters so
/// the sentinel and explicit forms of a stream buffer size match each other.
#[derive(Debug, Clone, Default)]
pub struct SkipSet {
    keys: HashSet<MeasurementKey>,
}

impl SkipSet {
    pub fn new<'a>(requests: impl IntoIterator<Item = &'a MeasurementRequest>) -> Self {
        Self {
            keys: requests.into_iter().map(MeasurementRequest::key).collect(),
        }
    }

    pub fn known_timeouts() -> Self {
        Self::new(&KNOWN_TIMEOUTS)
    }

    pub fn contains(&self, request: &MeasurementRequest) -> bool {
        self.keys.contains(&request.key())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
