use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level abacus configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbacusConfig {
    /// Verification pipeline settings.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Settings for the `check` and `report` pipelines.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Run the coverage stage.
    #[serde(default = "default_true")]
    pub coverage: bool,

    /// Run the lint stage.
    #[serde(default = "default_true")]
    pub lint: bool,

    /// Run the format-check stage.
    #[serde(default = "default_true")]
    pub fmt: bool,

    /// Treat lint and format findings as failures instead of warnings.
    #[serde(default)]
    pub deny_warnings: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            coverage: true,
            lint: true,
            fmt: true,
            deny_warnings: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl AbacusConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
