use clap::Parser;
use server::args::Args;
use server::configs::config_provider::FileConfigProvider;
use server::configs::server::ServerConfig;
use server::http::http_server;
use server::log::logger::Logging;
use server::measurement::service::MeasurementService;
use server::server_error::ServerError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args = Args::parse();
    let config_provider = FileConfigProvider::resolve(args.config_path);
    let config = ServerConfig::load(&config_provider)?;

    let mut logging = Logging::new();
    logging.init(&config.logging)?;
    info!("Loaded config from: '{}'", config_provider.path());
    info!("Using config: {config}");

    let service = MeasurementService::new(&config.storage, &config.limits);
    http_server::start(config.http, service).await?;
    info!("diskperf server has finished.");
    Ok(())
}
