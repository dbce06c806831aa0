//! CLI subcommands and the settings they share.

pub mod batch;
pub mod config;
pub mod output;
pub mod price;

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use invprice_core::models::config::InvpriceConfig;
use invprice_core::GeminiPriceExtractor;

/// Gemini settings that override the configuration file.
#[derive(Args, Debug, Default)]
pub struct GeminiArgs {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Gemini API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invprice")
        .join("config.json")
}

/// Load the configuration file (explicit path, default path, or defaults)
/// and apply command-line overrides.
pub fn load_config(config_path: Option<&Path>, overrides: &GeminiArgs) -> anyhow::Result<InvpriceConfig> {
    let mut config = match config_path {
        Some(path) => InvpriceConfig::from_file(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e)
        })?,
        None => {
            let path = default_config_path();
            if path.exists() {
                debug!("Using config file {}", path.display());
                InvpriceConfig::from_file(&path)?
            } else {
                InvpriceConfig::default()
            }
        }
    };

    if let Some(api_key) = &overrides.api_key {
        config.gemini.api_key = Some(api_key.clone());
    }
    if let Some(base_url) = &overrides.base_url {
        config.gemini.base_url = base_url.clone();
    }
    if let Some(timeout_secs) = overrides.timeout_secs {
        config.gemini.timeout_secs = timeout_secs;
    }

    Ok(config)
}

/// Build the extractor, failing early when no API key is available.
pub fn build_extractor(config: &InvpriceConfig) -> anyhow::Result<GeminiPriceExtractor> {
    if config.gemini.usable_api_key().is_none() {
        anyhow::bail!(
            "Gemini API key is not configured. Pass --api-key, set GEMINI_API_KEY, \
             or run 'invprice config set gemini.api_key <KEY>'."
        );
    }
    Ok(GeminiPriceExtractor::new(config.gemini.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"gemini": {"api_key": "from-file", "timeout_secs": 10}}"#).unwrap();

        let overrides = GeminiArgs {
            api_key: Some("from-flag".to_string()),
            base_url: Some("http://localhost:9".to_string()),
            timeout_secs: None,
        };
        let config = load_config(Some(path.as_path()), &overrides).unwrap();

        assert_eq!(config.gemini.api_key.as_deref(), Some("from-flag"));
        assert_eq!(config.gemini.base_url, "http://localhost:9");
        assert_eq!(config.gemini.timeout_secs, 10);
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let result = load_config(Some(Path::new("/nonexistent/invprice.json")), &GeminiArgs::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_build_extractor_requires_key() {
        let err = build_extractor(&InvpriceConfig::default()).err().unwrap();
        assert!(err.to_string().contains("API key is not configured"));
    }
}
