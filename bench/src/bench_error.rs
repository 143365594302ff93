use diskperf::error::DiskPerfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    DiskPerf(#[from] DiskPerfError),
    #[error("Cannot write results log")]
    Csv(#[from] csv::Error),
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("Start index {0} is out of range, the matrix has {1} combinations")]
    InvalidStartIndex(usize, usize),
    #[error("Invalid iterations count: {0}")]
    InvalidIterations(u32),
}
