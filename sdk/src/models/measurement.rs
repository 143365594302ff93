use crate::error::DiskPerfError;
use crate::models::query::QueryParams;
use crate::models::stream_buffer_size::StreamBufferSize;
use crate::models::target_directory::TargetDirectory;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const TARGET_DIR_PARAM: &str = "targetDir";
pub const DATA_SIZE_PARAM: &str = "dataSize";
pub const APP_BUFFER_SIZE_PARAM: &str = "appBufferSize";
pub const FILE_STREAM_BUFFER_SIZE_PARAM: &str = "fileStreamBufferSize";
pub const RESERVE_LENGTH_PARAM: &str = "reserveLength";

/// App buffer size used by the default-buffering variant.
pub const DEFAULT_APP_BUFFER_SIZE: u32 = 81920;
/// Stream buffer size used by the default-buffering variant.
pub const DEFAULT_STREAM_BUFFER_SIZE: u32 = 4096;

/// Parameters of a single timed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasurementRequest {
    pub target_directory: TargetDirectory,
    pub data_size: u64,
    pub app_buffer_size: u32,
    pub file_stream_buffer_size: StreamBufferSize,
    pub reserve_length: bool,
}

/// A request with the stream buffer sentinel resolved.
///
/// Two requests with the same key perform the same write. Field order defines
/// the matrix ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeasurementKey {
    pub target_directory: TargetDirectory,
    pub data_size: u64,
    pub app_buffer_size: u32,
    pub file_stream_buffer_size: u32,
    pub reserve_length: bool,
}

impl MeasurementRequest {
    pub fn with_defaults(
        target_directory: TargetDirectory,
        data_size: u64,
        reserve_length: bool,
    ) -> Self {
        Self {
            target_directory,
            data_size,
            app_buffer_size: DEFAULT_APP_BUFFER_SIZE,
            file_stream_buffer_size: StreamBufferSize::Bytes(DEFAULT_STREAM_BUFFER_SIZE),
            reserve_length,
        }
    }

    pub fn resolved_stream_buffer_size(&self) -> u32 {
        self.file_stream_buffer_size.resolve(self.app_buffer_size)
    }

    pub fn key(&self) -> MeasurementKey {
        MeasurementKey {
            target_directory: self.target_directory,
            data_size: self.data_size,
            app_buffer_size: self.app_buffer_size,
            file_stream_buffer_size: self.resolved_stream_buffer_size(),
            reserve_length: self.reserve_length,
        }
    }

    pub fn from_query(params: &QueryParams) -> Result<Self, DiskPerfError> {
        let request = Self {
            target_directory: Self::target_directory_from_query(params)?,
            data_size: params.required(DATA_SIZE_PARAM)?,
            app_buffer_size: params.required(APP_BUFFER_SIZE_PARAM)?,
            file_stream_buffer_size: params.required(FILE_STREAM_BUFFER_SIZE_PARAM)?,
            reserve_length: params.optional(RESERVE_LENGTH_PARAM, false)?,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn defaults_from_query(params: &QueryParams) -> Result<Self, DiskPerfError> {
        Ok(Self::with_defaults(
            Self::target_directory_from_query(params)?,
            params.required(DATA_SIZE_PARAM)?,
            params.optional(RESERVE_LENGTH_PARAM, false)?,
        ))
    }

    fn target_directory_from_query(params: &QueryParams) -> Result<TargetDirectory, DiskPerfError> {
        let value = params
            .get(TARGET_DIR_PARAM)
            .ok_or_else(|| DiskPerfError::MissingParameter(TARGET_DIR_PARAM.to_string()))?;
        TargetDirectory::parse(value)
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (TARGET_DIR_PARAM, self.target_directory.to_string()),
            (DATA_SIZE_PARAM, self.data_size.to_string()),
            (APP_BUFFER_SIZE_PARAM, self.app_buffer_size.to_string()),
            (
                FILE_STREAM_BUFFER_SIZE_PARAM,
                self.file_stream_buffer_size.to_wire().to_string(),
            ),
            (RESERVE_LENGTH_PARAM, self.reserve_length.to_string()),
        ]
    }
}

impl Validatable<DiskPerfError> for MeasurementRequest {
    fn validate(&self) -> Result<(), DiskPerfError> {
        if self.app_buffer_size == 0 {
            return Err(DiskPerfError::InvalidAppBufferSize(self.app_buffer_size));
        }

        if let StreamBufferSize::Bytes(0) = self.file_stream_buffer_size {
            return Err(DiskPerfError::InvalidStreamBufferSize(0));
        }

        Ok(())
    }
}

impl Display for MeasurementRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "target: {}, data size: {}, app buffer: {}, stream buffer: {}, reserve length: {}",
            self.target_directory,
            self.data_size,
            self.app_buffer_size,
            self.file_stream_buffer_size,
            self.reserve_length
        )
    }
}

/// Outcome of one timed write, as reported by the service.
///
/// Field names are serialized in camel case and matched case-insensitively on
/// decode (the client lowercases keys before deserializing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MeasurementResult {
    #[serde(rename(serialize = "targetDir", deserialize = "targetdir"))]
    pub target_directory: TargetDirectory,
    #[serde(rename(deserialize = "generatedpath"))]
    pub generated_path: String,
    #[serde(rename(deserialize = "datasize"))]
    pub data_size: u64,
    #[serde(rename(deserialize = "appbuffersize"))]
    pub app_buffer_size: u32,
    #[serde(rename(deserialize = "filestreambuffersize"))]
    pub file_stream_buffer_size: u32,
    #[serde(rename(deserialize = "elapsedms"))]
    pub elapsed_ms: f64,
    #[serde(default, rename(deserialize = "reservelength"))]
    pub reserve_length: bool,
}

impl MeasurementResult {
    /// The parameters the service actually used, with the sentinel resolved.
    pub fn effective_request(&self) -> MeasurementRequest {
        MeasurementRequest {
            target_directory: self.target_directory,
            data_size: self.data_size,
            app_buffer_size: self.app_buffer_size,
            file_stream_buffer_size: StreamBufferSize::Bytes(self.file_stream_buffer_size),
            reserve_length: self.reserve_length,
        }
    }
}
