//! Hosting Server Binary
//!
//! Serves online Kalah sessions over WebSocket.
//! Stale waiting sessions are swept in the background.

use clap::Parser;
use mancala::*;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "hosting", about = "Host two-player Kalah games over WebSocket")]
struct Args {
    /// Address the HTTP server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind: String,
    /// Age after which a session still waiting for a guest is evicted (e.g. 30s, 10m)
    #[arg(long, env = "STALE_TIMEOUT", default_value = "10m", value_parser = duration)]
    stale: Duration,
    /// Period of the stale-session sweep
    #[arg(long, env = "SWEEP_INTERVAL", default_value = "1m", value_parser = duration)]
    sweep: Duration,
}

fn duration(s: &str) -> Result<Duration, String> {
    parse_duration(s).ok_or_else(|| format!("invalid duration: {}", s))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log();
    kys();
    let config = hosting::LobbyConfig::new(args.stale, args.sweep);
    hosting::Server::run(config, args.bind).await
}
