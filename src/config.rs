//! Configuration loading.
//!
//! The default configuration file is `stylish-report.toml` in the current
//! working directory. Every field has a default, so the file is optional:
//!
//! ```toml
//! [output]
//! color = "never"
//!
//! [strict]
//! enabled = true
//! ```

use std::path::Path;

use crate::error::{Error, Result};
use crate::output::ColorChoice;

/// File name looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "stylish-report.toml";

/// Main configuration for the report binary.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    /// When strict mode is enabled, warnings alone fail the run.
    pub strict: StrictConfig,
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorChoice,
}

/// Strict-mode configuration.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    /// Set to `true` to fail on warnings.
    pub enabled: bool,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] when the explicit path does not exist.
    /// - [`Error::Io`] when the file cannot be read.
    /// - [`Error::ConfigParse`] when the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => {
                return Err(Error::ConfigNotFound {
                    path: p.to_path_buf(),
                })
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        match config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let content = std::fs::read_to_string(&path)?;
                Config::parse(&content).map_err(|message| Error::ConfigParse { path, message })
            }
            None => Ok(Config::default()),
        }
    }

    fn parse(content: &str) -> std::result::Result<Config, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
