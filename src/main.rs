use anyhow::Result;
use clap::Parser;
use envirotrackd::{Config, server};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Dashboard daemon for the EnviroTrack AI monitoring system")]
struct Args {
    /// Path to a TOML config file
    #[clap(long)]
    config: Option<PathBuf>,

    /// Override the listen host
    #[clap(long)]
    host: Option<String>,

    /// Override the listen port
    #[clap(long)]
    port: Option<u16>,

    /// Override the directory containing the built bundle
    #[clap(long)]
    dist_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dist_dir) = args.dist_dir {
        config.dashboard.dist_dir = dist_dir;
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    info!("[main] envirotrackd {} starting", env!("CARGO_PKG_VERSION"));
    server::run(&config).await
}
