use anyhow::{Context, Result};
use endpoint_invoker::{Invoker, config};
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Reads the payload from the file named on the command line, or stdin.
async fn read_payload() -> Result<Value> {
    let raw = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read payload file {}", path))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Payload is not valid JSON")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Logs go to stderr so stdout carries only the response
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?,
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        "Invoking endpoint {} ({:?}, {})",
        config.endpoint.name, config.endpoint.provider, config.endpoint.region
    );

    let payload = read_payload().await?;
    let invoker = Invoker::from_config(&config.endpoint).await?;
    let prediction = invoker.invoke(&payload).await?;

    println!("{}", serde_json::to_string_pretty(&prediction)?);

    Ok(())
}
