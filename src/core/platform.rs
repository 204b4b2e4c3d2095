//! Target platforms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating system a target is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Os {
    #[serde(rename = "macos")]
    MacOs,
    #[serde(rename = "ios")]
    IOs,
    #[serde(rename = "tvos")]
    TvOs,
    #[serde(rename = "watchos")]
    WatchOs,
}

impl Os {
    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Os::MacOs => "macOS",
            Os::IOs => "iOS",
            Os::TvOs => "tvOS",
            Os::WatchOs => "watchOS",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The platform a target is configured for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub os: Os,

    /// CPU architecture (e.g. `arm64`, `x86_64`)
    pub arch: String,

    pub minimum_os_version: String,

    /// Optional qualifier such as `Simulator` or `Device`
    #[serde(default)]
    pub environment: Option<String>,
}

impl Platform {
    /// Create a platform without an environment qualifier.
    pub fn new(os: Os, arch: impl Into<String>, minimum_os_version: impl Into<String>) -> Self {
        Platform {
            os,
            arch: arch.into(),
            minimum_os_version: minimum_os_version.into(),
            environment: None,
        }
    }

    /// Set the environment qualifier.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.os, self.minimum_os_version, self.arch)?;
        if let Some(env) = &self.environment {
            write!(f, " ({})", env)?;
        }
        Ok(())
    }
}
