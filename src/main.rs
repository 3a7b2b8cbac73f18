use anyhow::{Context, Result};
use clap::Parser;
use hn_gateway::config::Config;
use hn_gateway::server;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Get the default config file path (~/.config/hn-gateway/config.toml)
fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("hn-gateway")
            .join("config.toml"),
    )
}

#[derive(Parser, Debug)]
#[command(name = "hn-gateway", about = "GraphQL gateway over the HNPWA Hacker News API")]
struct Args {
    /// Config file (defaults to ~/.config/hn-gateway/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:4000
    #[arg(long, value_name = "ADDR")]
    listen: Option<SocketAddr>,

    /// Upstream API root (HTTPS, or http://localhost for testing)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Do not serve the GraphiQL IDE
    #[arg(long)]
    no_graphiql: bool,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(listen) = self.listen {
            config.listen = listen;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if self.no_graphiql {
            config.graphiql = false;
        }
        config
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = Args::parse();

    let config = match args.config.take().or_else(default_config_path) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let config = args.apply(config);
    config.validate().context("Invalid configuration")?;

    let app = server::app(&config).context("Failed to initialize gateway")?;

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    println!("Server ready at http://{}/graphql", config.listen);

    server::serve(listener, app, shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
