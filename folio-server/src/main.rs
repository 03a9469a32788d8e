//! # Folio Server
//!
//! Serves the portfolio site's navigation dock, testimonial carousel, skills
//! and contact intake over HTTP, backed by a Sanity project.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use folio_config::{Config, ConfigLoad, ConfigLoader};
use folio_core::{SanityClient, SanityOptions, SharedCmsClient};
use folio_server::{AppState, create_app};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "folio-server")]
#[command(about = "Portfolio site server backed by a Sanity CMS project")]
struct Cli {
    /// Path to a folio.toml configuration file
    #[arg(short, long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(&cli)?;
    let cms = build_cms_client(&config)?;
    let addr = config.server.bind_address();

    let state = AppState::new(cms, config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Starting folio server on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host.clone() {
        config.server.host = host;
    }

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!("using configuration {}", path.display());
    }
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => warn!("{} ({hint})", warning.message),
            None => warn!("{}", warning.message),
        }
    }

    Ok(config)
}

fn sanity_options(config: &Config) -> SanityOptions {
    SanityOptions {
        project_id: config.cms.project_id.clone(),
        dataset: config.cms.dataset.clone(),
        api_version: config.cms.api_version.clone(),
        token: config.cms.token.clone(),
        use_cdn: config.cms.use_cdn,
        api_host: None,
    }
}

fn build_cms_client(config: &Config) -> anyhow::Result<SharedCmsClient> {
    let options = sanity_options(config);
    info!(
        project = %options.project_id,
        dataset = %options.dataset,
        cdn = options.use_cdn,
        "configured Sanity client"
    );
    let client =
        SanityClient::new(options).context("failed to build Sanity client")?;
    Ok(Arc::new(client))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
