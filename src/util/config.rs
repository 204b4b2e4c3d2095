//! Configuration file support for projgen.
//!
//! projgen reads two configuration file locations:
//! - Global: `~/.projgen/config.toml` - User-wide defaults
//! - Project: `.projgen/config.toml` - Next to the project spec being read
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::DuplicatePathPolicy;

/// projgen configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Product checks
    pub products: ProductsConfig,

    /// Terminal output
    pub output: OutputConfig,
}

/// Product-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsConfig {
    /// How `check` treats several targets declaring one product path
    pub duplicate_paths: Option<DuplicatePathPolicy>,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use ANSI colors in diagnostics (None = on)
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.products.duplicate_paths.is_some() {
            self.products.duplicate_paths = other.products.duplicate_paths;
        }
        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
    }

    /// The duplicate product path policy, defaulting to warn.
    pub fn duplicate_paths(&self) -> DuplicatePathPolicy {
        self.products.duplicate_paths.unwrap_or_default()
    }

    /// Whether diagnostics are colored, defaulting to on.
    pub fn color(&self) -> bool {
        self.output.color.unwrap_or(true)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.projgen/config.toml)
/// 2. Global config (~/.projgen/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path.filter(|p| p.exists()) {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global projgen config directory (~/.projgen).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".projgen"))
}

/// Get the global config path (~/.projgen/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.projgen/config.toml) for a spec's directory.
pub fn project_config_path(spec_dir: &Path) -> PathBuf {
    spec_dir.join(".projgen").join("config.toml")
}
