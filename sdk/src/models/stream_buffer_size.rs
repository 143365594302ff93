use crate::error::DiskPerfError;
use std::fmt::Display;
use std::str::FromStr;

/// Wire value meaning "use the app buffer size as the stream buffer size".
pub const MATCH_APP_BUFFER_SENTINEL: i64 = -1;

const MATCH_APP_BUFFER_NAME: &str = "app";

/// Buffer capacity handed to the file handle at open time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamBufferSize {
    MatchAppBuffer,
    Bytes(u32),
}

impl StreamBufferSize {
    pub fn from_wire(value: i64) -> Result<Self, DiskPerfError> {
        match value {
            MATCH_APP_BUFFER_SENTINEL => Ok(StreamBufferSize::MatchAppBuffer),
            value if value > 0 && value <= u32::MAX as i64 => {
                Ok(StreamBufferSize::Bytes(value as u32))
            }
            value => Err(DiskPerfError::InvalidStreamBufferSize(value)),
        }
    }

    pub fn to_wire(&self) -> i64 {
        match self {
            StreamBufferSize::MatchAppBuffer => MATCH_APP_BUFFER_SENTINEL,
            StreamBufferSize::Bytes(size) => *size as i64,
        }
    }

    pub fn resolve(&self, app_buffer_size: u32) -> u32 {
        match self {
            StreamBufferSize::MatchAppBuffer => app_buffer_size,
            StreamBufferSize::Bytes(size) => *size,
        }
    }
}

impl FromStr for StreamBufferSize {
    type Err = DiskPerfError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(MATCH_APP_BUFFER_NAME) {
            return Ok(StreamBufferSize::MatchAppBuffer);
        }

        let value = value.parse::<i64>().map_err(|_| {
            DiskPerfError::InvalidParameter("fileStreamBufferSize".to_string(), value.to_string())
        })?;
        StreamBufferSize::from_wire(value)
    }
}

impl Display for StreamBufferSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamBufferSize::MatchAppBuffer => write!(f, "{MATCH_APP_BUFFER_NAME}"),
            StreamBufferSize::Bytes(size) => write!(f, "{size}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_should_resolve_to_app_buffer_size() {
        let size = StreamBufferSize::from_wire(-1).unwrap();
        assert_eq!(size, StreamBufferSize::MatchAppBuffer);
        assert_eq!(size.resolve(4 * 1024 * 1024), 4 * 1024 * 1024);
        assert_eq!(size.to_wire(), MATCH_APP_BUFFER_SENTINEL);
    }

    #[test]
    fn literal_size_should_ignore_app_buffer_size() {
        let size = StreamBufferSize::from_wire(4096).unwrap();
        assert_eq!(size.resolve(1024), 4096);
    }

    #[test]
    fn zero_and_other_negatives_should_be_rejected() {
        for value in [0, -2, -4096] {
            assert!(matches!(
                StreamBufferSize::from_wire(value),
                Err(DiskPerfError::InvalidStreamBufferSize(v)) if v == value
            ));
        }
    }

    #[test]
    fn should_parse_app_alias_and_numbers() {
        assert_eq!(
            "APP".parse::<StreamBufferSize>().unwrap(),
            StreamBufferSize::MatchAppBuffer
        );
        assert_eq!(
            "-1".parse::<StreamBufferSize>().unwrap(),
            StreamBufferSize::MatchAppBuffer
        );
        assert_eq!(
            "8192".parse::<StreamBufferSize>().unwrap(),
            StreamBufferSize::Bytes(8192)
        );
        assert!("eight".parse::<StreamBufferSize>().is_err());
    }
}
