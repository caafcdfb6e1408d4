mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path, env::var(API_KEY_ENV).ok()).await
}

/// Reads the YAML file at `path` if it exists, applies the credential
/// override and checks that a credential is present.
pub async fn load_from(path: impl AsRef<Path>, api_key: Option<String>) -> Result<Config> {
    let path = path.as_ref();

    let mut config = if tokio::fs::try_exists(path).await? {
        debug!("Loading configuration from: {}", path.display());
        let config_str = tokio::fs::read_to_string(path).await?;
        serde_yaml::from_str(&config_str)?
    } else {
        debug!(
            "No configuration file at {}, using defaults",
            path.display()
        );
        Config::default()
    };

    if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
        config.llm.api_key = key;
    }

    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "{} is not set in environment variables",
            API_KEY_ENV
        )));
    }

    Ok(config)
}
