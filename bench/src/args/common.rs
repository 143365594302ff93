use super::defaults::*;
use super::run::RunArgs;
use clap::{Parser, Subcommand};
use diskperf::http::config::HttpClientConfig;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct BenchArgs {
    #[command(subcommand)]
    pub command: BenchCommand,

    /// Base URL of the measurement service API
    #[arg(long, short = 'u', global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Access key sent as the `code` query parameter
    #[arg(long, global = true, env = "DISKPERF_CODE", hide_env_values = true)]
    pub code: Option<String>,

    /// Overall timeout of a single request, e.g. 30s or 10m
    #[arg(long, global = true, default_value = DEFAULT_TIMEOUT, value_parser = humantime::parse_duration)]
    pub timeout: Duration,
}

#[derive(Subcommand, Debug)]
pub enum BenchCommand {
    /// Run the write benchmark matrix and append results to a CSV file
    Run(RunArgs),
    /// Print free and total space of the service's target directories
    DiskUsage,
}

impl BenchArgs {
    pub fn client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            api_url: self.api_url.clone(),
            access_key: self.code.clone(),
            timeout: self.timeout,
        }
    }
}
