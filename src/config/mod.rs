// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. The only setting
//! that matters is the OMDb API key, which may also be supplied through the
//! `OMDB_API_KEY` environment variable.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "cinefind";

const API_KEY_VAR: &str = "OMDB_API_KEY";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: u32,
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Resolves the API key, preferring the environment over the
    /// configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error naming both places a key can come from if neither
    /// has one.
    pub fn api_key(&self, env_key: Option<String>) -> Result<String> {
        env_key
            .or_else(|| self.api_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                let path = config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| CONFIG_NAME.to_string());
                anyhow!("No OMDb API key configured, set {API_KEY_VAR} or api_key in {path}")
            })
    }
}

/// Reads the API key from the environment.
pub fn env_api_key() -> Option<String> {
    std::env::var(API_KEY_VAR).ok()
}

/// Loads the configuration, `confy` writes the defaults on first run so the
/// file exists for the user to edit.
pub fn load_config() -> AppConfig {
    match confy::load(CONFIG_NAME, None) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load configuration, using defaults");
            AppConfig::default()
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to locate configuration file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_key_wins() {
        let cfg = AppConfig {
            version: 1,
            api_key: Some("from-file".to_string()),
        };

        assert_eq!(cfg.api_key(Some("from-env".to_string())).unwrap(), "from-env");
        assert_eq!(cfg.api_key(None).unwrap(), "from-file");
    }

    #[test]
    fn blank_key_is_missing() {
        let cfg = AppConfig {
            version: 1,
            api_key: Some("   ".to_string()),
        };

        let err = cfg.api_key(None).unwrap_err();
        assert!(err.to_string().contains("OMDB_API_KEY"));
    }

    #[test]
    fn default_has_no_key() {
        assert!(AppConfig::default().api_key(None).is_err());
    }
}
