use crate::configs::system::LoggingConfig;
use crate::server_error::ServerError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "diskperf-server.log";

/// Owns the non-blocking file writer; dropping it flushes and stops file logging.
#[derive(Default)]
pub struct Logging {
    file_guard: Option<WorkerGuard>,
}

impl Logging {
    pub fn new() -> Self {
        Self::default()
    }

    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&mut self, config: &LoggingConfig) -> Result<(), ServerError> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .map_err(|error| ServerError::LoggingInitFailure(error.to_string()))?;

        let stdout_layer = fmt::layer().with_target(true);

        let file_layer = if config.path.is_empty() {
            None
        } else {
            let file_appender = tracing_appender::rolling::never(&config.path, LOG_FILE_NAME);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);
            self.file_guard = Some(file_guard);
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(non_blocking_file),
            )
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .with(file_layer)
            .try_init()
            .map_err(|error| ServerError::LoggingInitFailure(error.to_string()))
    }
}
