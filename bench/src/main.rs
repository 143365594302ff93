mod args;
mod bench_error;
mod benchmark_record;
mod matrix;
mod results_log;
mod runner;

use crate::args::common::{BenchArgs, BenchCommand};
use crate::args::run::RunArgs;
use crate::bench_error::BenchError;
use crate::matrix::build_matrix;
use crate::matrix::skip_set::SkipSet;
use crate::results_log::ResultsLog;
use crate::runner::{BenchmarkRunner, RunSettings};
use clap::Parser;
use diskperf::client::MeasurementClient;
use diskperf::http::client::HttpClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), BenchError> {
    let args = BenchArgs::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = HttpClient::create(args.client_config())?;
    match args.command {
        BenchCommand::Run(run_args) => run(&client, &run_args).await,
        BenchCommand::DiskUsage => print_disk_usage(&client).await,
    }
}

async fn run(client: &HttpClient, args: &RunArgs) -> Result<(), BenchError> {
    let skip_set = SkipSet::known_timeouts();
    let matrix = build_matrix(&args.parameter_space(), &skip_set);
    if !skip_set.is_empty() {
        info!("Skipping {} known timeout combinations.", skip_set.len());
    }
    if args.dry_run {
        for (index, case) in matrix.iter().enumerate() {
            info!("{index}: {case}");
        }
        return Ok(());
    }

    info!("Starting the benchmarks against: {}", client.api_url);
    client.ping().await?;
    let results = ResultsLog::new(&args.output);
    if args.start_index > 0 && results.path().exists() {
        info!(
            "Resuming at test {} with {} records already in: {}",
            args.start_index + 1,
            results.read_rows()?.len(),
            results.path().display()
        );
    }
    let settings = RunSettings {
        iterations: args.iterations,
        start_index: args.start_index,
        skip_warmup: args.skip_warmup,
    };
    BenchmarkRunner::new(client, results, settings)
        .run(&matrix)
        .await?;
    info!("Finished the benchmarks.");
    Ok(())
}

async fn print_disk_usage(client: &HttpClient) -> Result<(), BenchError> {
    for usage in client.get_disk_usage().await? {
        info!(
            "{}: {}, free: {} bytes, total: {} bytes",
            usage.target_directory, usage.path, usage.free_bytes, usage.total_bytes
        );
    }
    Ok(())
}
