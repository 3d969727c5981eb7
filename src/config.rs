//! TOML configuration for the command-line front-end

use std::path::Path;

use anyhow::Context;
use campusnav_core::NavigationConfig;
use serde::Deserialize;

/// Contents of the configuration file. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub navigation: NavigationConfig,
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(text).context("invalid configuration")?;
        config.navigation.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}
