//! Program configuration
//!
//! The defaults reproduce the built-in program, which adds `10` and `2`. A TOML
//! file passed with `--config` can override either operand:
//!
//! ```toml
//! [operands]
//! a = 40
//! b = 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Operands for the default addition
    #[serde(default)]
    pub operands: Operands,
}

/// Operands for the default addition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    /// First operand
    #[serde(default = "default_a")]
    pub a: i32,
    /// Second operand
    #[serde(default = "default_b")]
    pub b: i32,
}

const fn default_a() -> i32 {
    10
}

const fn default_b() -> i32 {
    2
}

impl Default for Operands {
    fn default() -> Self {
        Self {
            a: default_a(),
            b: default_b(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load from `path` if one was given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
