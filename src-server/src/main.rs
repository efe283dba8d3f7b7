use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use min_now_server::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "min-now-server")]
#[command(about = "Serves the Min-Now frontend and proxies its API", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short, long)]
    bind: Option<String>,

    /// Base URL of the backend API
    #[arg(long)]
    api_base_url: Option<String>,

    /// Directory holding the built frontend
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(url) = self.api_base_url {
            config.api_base_url = url;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
        if let Some(seconds) = self.timeout {
            config.request_timeout_seconds = seconds;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = ServerConfig::from_env();
    Args::parse().apply(&mut config);
    config.normalize();

    min_now_server::run(config).await
}
