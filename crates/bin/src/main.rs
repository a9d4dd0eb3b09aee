//! opendart CLI binary.
//!
//! Serves the DART financial statement proxy over HTTP, or runs a single
//! statement request from the command line.

mod logging;

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use logging::{LogFormat, init_logging};
use opendart::{DART_API_BASE, DartClient, StatementParams, StatementService, build_router};

#[derive(Debug, Parser)]
#[command(name = "opendart")]
#[command(about = "DART financial statement proxy", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Args)]
struct Config {
    /// DART Open API key
    #[arg(long, env = "DART_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// DART Open API base URL
    #[arg(long, env = "DART_API_BASE", default_value = DART_API_BASE, global = true)]
    api_base: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "DART_TIMEOUT_SECS", default_value = "10", global = true)]
    timeout_secs: u64,

    /// Base log level (overridden by RUST_LOG)
    #[arg(long, env = "OPENDART_LOG", default_value = "info", global = true)]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, env = "OPENDART_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },

    /// Fetch one statement and print the report as JSON
    Summary {
        /// DART corporation code
        #[arg(long)]
        company: String,

        /// Business year (YYYY)
        #[arg(long)]
        year: String,

        /// Report type code (11011, 11012, 11013, 11014)
        #[arg(long)]
        report_type: Option<String>,

        /// Statement division (CFS or OFS)
        #[arg(long)]
        fs_div: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.config.log_level, cli.config.log_format);

    let service = build_service(&cli.config)?;

    match cli.command {
        Commands::Serve { bind } => serve(service, bind).await?,
        Commands::Summary {
            company,
            year,
            report_type,
            fs_div,
        } => {
            let params = StatementParams {
                company: Some(company),
                year: Some(year),
                report_type,
                fs_div,
            };
            summary(&service, &params).await?;
        }
    }

    Ok(())
}

fn build_service(config: &Config) -> anyhow::Result<StatementService> {
    let client = DartClient::new()
        .context("failed to create DART client")?
        .with_api_base(config.api_base.as_str())
        .with_timeout(Duration::from_secs(config.timeout_secs));

    Ok(StatementService::new(
        Arc::new(client),
        config.api_key.clone().filter(|k| !k.trim().is_empty()),
    ))
}

async fn serve(service: StatementService, bind: SocketAddr) -> anyhow::Result<()> {
    if !service.has_api_key() {
        tracing::warn!("DART_API_KEY is not set; statement requests will answer 500");
    }

    let app = build_router(service);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), %bind, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn summary(service: &StatementService, params: &StatementParams) -> anyhow::Result<()> {
    let report = service.fetch_report(params).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.is_success() {
        anyhow::bail!("DART status {}: {}", report.status, report.message);
    }

    Ok(())
}
