mod config;
mod logging;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tokio_util::sync::CancellationToken;

use roi_simulator::api::rest::router;
use roi_simulator::domain::report::PlainTextReportRenderer;
use roi_simulator::infra::storage::migrations::Migrator;
use roi_simulator::infra::storage::repo::SeaOrmScenarioRepository;
use roi_simulator::Service;

use crate::config::{AppConfig, CliOverrides};

/// ROI Simulator - automation ROI projection backend
#[derive(Parser)]
#[command(name = "roi-server")]
#[command(about = "ROI Simulator - automation ROI projection backend")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
        }
    }

    let overrides = CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (ROI_SIM__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&overrides);

    logging::init(&config.logging);

    tracing::info!("ROI simulator server starting");

    if cli.print_config {
        println!(
            "Effective configuration:\n{}",
            serde_json::to_string_pretty(&config)?
        );
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config
        .server
        .bind_addr
        .parse::<std::net::SocketAddr>()
        .with_context(|| format!("invalid server.bind_addr: {}", config.server.bind_addr))?;
    println!("Configuration is valid");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let conn = Database::connect(&config.database.dsn)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.dsn))?;
    Migrator::up(&conn, None)
        .await
        .context("failed to run database migrations")?;
    tracing::info!(dsn = %config.database.dsn, "database ready");

    let repo = Arc::new(SeaOrmScenarioRepository::new(conn));
    let service = Arc::new(Service::new(repo, Arc::new(PlainTextReportRenderer)));
    let app = router(service, &config.cors);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "HTTP server bound");

    // Ctrl-C (or SIGTERM via the runtime default) flips the token and the
    // serve loop drains in-flight requests before returning.
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install shutdown signal handler");
            return;
        }
        tracing::info!("shutdown signal received");
        signal_cancel.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await
        .context("HTTP server error")?;

    Ok(())
}
