use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML config file, defaults to DISKPERF_CONFIG_PATH or configs/server.toml
    #[arg(short, long)]
    pub config_path: Option<String>,
}
