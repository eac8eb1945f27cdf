mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(config_path).await
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    validate(&config.endpoint)?;
    Ok(config)
}

fn validate(endpoint: &EndpointConfig) -> Result<()> {
    if endpoint.name.trim().is_empty() {
        return Err(Error::config("endpoint.name must not be empty"));
    }
    if endpoint.timeout_secs == 0 {
        return Err(Error::config("endpoint.timeout_secs must be greater than zero"));
    }
    if endpoint.provider == EndpointProvider::AzureMl && endpoint.url.is_none() {
        return Err(Error::config("azure_ml endpoints require endpoint.url"));
    }
    Ok(())
}
