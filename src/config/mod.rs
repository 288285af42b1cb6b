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
//! This module manages the application configuration file. The file lives in
//! the platform configuration directory and is created with default values on
//! first run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "setlist";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// TOML file of `[[tracks]]` entries to use instead of the built-in
    /// catalog.
    pub catalog_file: Option<PathBuf>,

    /// Log filter directive, overridden by `RUST_LOG` when set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_file: None,
            log_level: "info".to_string(),
        }
    }
}

pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

/// Directory that holds the log file, alongside the configuration file.
///
/// Falls back to the system temporary directory when the configuration
/// directory cannot be determined.
pub fn log_dir() -> PathBuf {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(std::env::temp_dir)
}
