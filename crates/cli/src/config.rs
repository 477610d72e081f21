// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! Configuration parsing and validation.
//!
//! Handles zcheck.toml parsing with version validation. Unknown keys are
//! rejected.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "zcheck.toml";

/// The only config version understood.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub commands: CommandsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            check: CheckConfig::default(),
            commands: CommandsConfig::default(),
        }
    }
}

/// `[check]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Pools checked when none are given on the command line.
    #[serde(default)]
    pub pools: Vec<String>,

    /// Check every pool.
    #[serde(default)]
    pub all: bool,

    /// Allow pools in REMOVED state.
    #[serde(default)]
    pub removable: bool,
}

/// `[commands]` section: program overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandsConfig {
    pub zpool: Option<String>,
}

/// Find zcheck.toml in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    path.is_file().then_some(path)
}

/// Resolve config path from CLI arg / env var, or discovery.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // Version first, so a newer config gets a useful message
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    toml::from_str(content).map_err(|e| config_error(e.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
