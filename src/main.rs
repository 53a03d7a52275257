use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use leta_relay::api::{AppState, create_router};
use leta_relay::config::{Config, SearchEngine, parse_flag};

/// Relay JSON search requests to Mullvad Leta.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Search engine: google or brave (overrides SEARCH_ENGINE)
    #[arg(long)]
    engine: Option<String>,

    /// Enable debug traces: true or 1 (overrides DEBUG)
    #[arg(long)]
    debug: Option<String>,

    /// Leta data endpoint (overrides LETA_URL)
    #[arg(long)]
    leta_url: Option<String>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(engine) = self.engine {
            config.engine = SearchEngine::parse_or_default(Some(&engine));
        }
        if let Some(debug) = self.debug {
            config.debug = parse_flag(Some(&debug));
        }
        if let Some(leta_url) = self.leta_url {
            config.leta_url = leta_url;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(Config::from_env()?);

    let level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .init();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        "Starting server on {addr} with search engine: {}",
        config.engine
    );

    let app = create_router(Arc::new(AppState::new(config)));
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
