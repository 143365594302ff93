use crate::client::MeasurementClient;
use crate::error::DiskPerfError;
use crate::http::client::{decode_json, HttpClient};
use crate::models::disk_usage::DiskUsage;
use crate::models::measurement::{
    MeasurementRequest, MeasurementResult, DATA_SIZE_PARAM, RESERVE_LENGTH_PARAM,
    TARGET_DIR_PARAM,
};
use crate::models::target_directory::TargetDirectory;
use async_trait::async_trait;

const PING: &str = "/ping";
const WRITE_PERF: &str = "/write-perf";
const WRITE_PERF_DEFAULTS: &str = "/write-perf/defaults";
const DISK_USAGE: &str = "/disk-usage";

#[async_trait]
impl MeasurementClient for HttpClient {
    async fn measure(
        &self,
        request: &MeasurementRequest,
    ) -> Result<MeasurementResult, DiskPerfError> {
        let response = self.get_with_query(WRITE_PERF, &request.to_query()).await?;
        let body = response.text().await?;
        decode_json(&body)
    }

    async fn measure_with_defaults(
        &self,
        target_directory: TargetDirectory,
        data_size: u64,
        reserve_length: bool,
    ) -> Result<MeasurementResult, DiskPerfError> {
        let query = [
            (TARGET_DIR_PARAM, target_directory.to_string()),
            (DATA_SIZE_PARAM, data_size.to_string()),
            (RESERVE_LENGTH_PARAM, reserve_length.to_string()),
        ];
        let response = self.get_with_query(WRITE_PERF_DEFAULTS, &query).await?;
        let body = response.text().await?;
        decode_json(&body)
    }

    async fn get_disk_usage(&self) -> Result<Vec<DiskUsage>, DiskPerfError> {
        let response = self.get(DISK_USAGE).await?;
        let body = response.text().await?;
        decode_json(&body)
    }

    async fn ping(&self) -> Result<(), DiskPerfError> {
        self.get(PING).await?;
        Ok(())
    }
}
