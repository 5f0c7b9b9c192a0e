mod server;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use axum::body::Bytes;
use clap::Parser;
use oko_core::{fetch_feed, Config};
use reqwest::ClientBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Upstream fetch is bounded so a hung connection cannot stall startup
/// forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Republishes the OKO.press article API as an RSS 2.0 feed and exits
/// once the configured lifetime elapses.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Port number to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Config file path
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => {
            info!("exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "fatal error");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(&cli.config)?;

    let client = ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("oko-server/0.1 (+https://oko.press)")
        .build()?;

    // The feed is built exactly once, before the listener is bound; no
    // request can ever observe a partial document.
    let payload = fetch_feed(&client, &config).await?;

    let listener = TcpListener::bind(("0.0.0.0", cli.port)).await?;
    server::run(listener, Bytes::from(payload), config.lifetime()).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
