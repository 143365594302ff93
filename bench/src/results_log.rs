use crate::benchmark_record::{BenchmarkRecord, BenchmarkRow};
use crate::bench_error::BenchError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Append-only CSV log of benchmark records.
///
/// The file is opened and closed for every record, so an interrupted run
/// loses at most the repetition in flight. The header is written only when
/// the file is missing or empty, which lets a resumed run keep appending.
#[derive(Debug, Clone)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &BenchmarkRecord) -> Result<(), BenchError> {
        let write_header = self
            .path
            .metadata()
            .map(|metadata| metadata.len() == 0)
            .unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(record.to_row())?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_rows(&self) -> Result<Vec<BenchmarkRow>, BenchError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let rows = reader
            .deserialize::<BenchmarkRow>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::benchmark_case::MeasurementFunction;
    use diskperf::models::measurement::MeasurementResult;
    use diskperf::models::target_directory::TargetDirectory;
    use std::time::Duration;

    fn record(data_size: u64) -> BenchmarkRecord {
        let result = MeasurementResult {
            target_directory: TargetDirectory::Temp,
            generated_path: String::new(),
            data_size,
            app_buffer_size: 4096,
            file_stream_buffer_size: 4096,
            elapsed_ms: 1.5,
            reserve_length: false,
        };
        BenchmarkRecord::new(MeasurementFunction::Defaults, &result, Duration::from_millis(3))
    }

    #[test]
    fn header_should_be_written_once_across_log_instances() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("results.csv");

        ResultsLog::new(&path).append(&record(1)).unwrap();
        ResultsLog::new(&path).append(&record(2)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "id,function,target_dir,data_size,app_buffer_size,file_stream_buffer_size,reserve_length,client_elapsed_ms,server_elapsed_ms"
        );
    }

    #[test]
    fn given_empty_file_header_should_be_written() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("results.csv");
        std::fs::File::create(&path).unwrap();
        let log = ResultsLog::new(&path);

        let appended = record(1);
        log.append(&appended).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("id,function,target_dir,"));
        assert_eq!(log.read_rows().unwrap(), vec![appended.to_row()]);
    }

    #[test]
    fn appended_rows_should_be_read_back_in_order() {
        let directory = tempfile::tempdir().unwrap();
        let log = ResultsLog::new(directory.path().join("results.csv"));

        let first = record(10);
        let second = record(20);
        log.append(&first).unwrap();
        log.append(&second).unwrap();

        let rows = log.read_rows().unwrap();
        assert_eq!(rows, vec![first.to_row(), second.to_row()]);
    }
}
