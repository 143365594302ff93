pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: &str = "10m";
pub const DEFAULT_ITERATIONS: u32 = 10;
pub const DEFAULT_START_INDEX: usize = 0;
pub const DEFAULT_OUTPUT_PATH: &str = "results.csv";

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;

pub const DEFAULT_APP_BUFFER_SIZES: [u32; 4] = [
    4 * KIB as u32,
    64 * KIB as u32,
    MIB as u32,
    4 * MIB as u32,
];
/// Base unit of the doubling data size sequence.
pub const DEFAULT_MIN_DATA_SIZE: u64 = MIB;
/// Ceiling of the doubling data size sequence.
pub const DEFAULT_MAX_DATA_SIZE: u64 = 256 * MIB;
