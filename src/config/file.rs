//! Configuration file support for persistent settings.
//!
//! This module loads defaults from a TOML file located at
//! `~/.config/path-size/config.toml` (or the platform-specific equivalent).
//! Values from the file act as defaults that CLI flags can turn on.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [traversal]
//! recursive = true
//! all = false
//! verbose = false
//!
//! [output]
//! human = true
//! json = false
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so that absent keys can be told apart from
/// explicit `false` values.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Traversal options
    #[serde(default)]
    pub traversal: FileTraversalConfig,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Traversal options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileTraversalConfig {
    /// Descend into subdirectories
    pub recursive: Option<bool>,

    /// Include hidden entries
    pub all: Option<bool>,

    /// Report skipped entries on stderr
    pub verbose: Option<bool>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Human-readable sizes
    pub human: Option<bool>,

    /// Emit JSON instead of the tab-separated line
    pub json: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/path-size/config.toml`, where
    /// `<config_dir>` is the platform configuration directory
    /// (e.g. `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// Returns `None` if the config directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("path-size").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if it
    /// contains invalid TOML or unknown keys.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid TOML, wrong value types or unknown keys.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
