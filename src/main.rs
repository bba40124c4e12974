//! product-compare - Side-by-side product feature comparison API
//!
//! A web service with TLS fingerprint emulation for reliable scraping of
//! product pages.

use anyhow::Result;
use clap::Parser;
use product_compare::api;
use product_compare::config::Config;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "product-compare",
    version,
    about = "Side-by-side product feature comparison API",
    long_about = "Fetches two e-commerce product pages, extracts product name, price, \
                  description and features from each, and serves the comparison as JSON."
)]
struct Cli {
    /// Address to bind the API server to
    #[arg(long, env = "COMPARE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "COMPARE_PORT")]
    port: Option<u16>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "COMPARE_PROXY")]
    proxy: Option<String>,

    /// Base delay before each fetch in milliseconds
    #[arg(long, env = "COMPARE_DELAY")]
    delay: Option<u64>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }

    api::serve(config).await?;

    Ok(())
}
