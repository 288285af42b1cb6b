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

//! Diagnostic logging.
//!
//! The terminal belongs to the UI while the application runs, so log output
//! goes to `setlist.log` in the configuration directory through a
//! non-blocking file writer.

use std::fs;

use anyhow::{Context, Result};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, prelude::*};

use crate::config::{self, AppConfig};

const LOG_FILE: &str = "setlist.log";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level. A configured
/// level that does not parse is replaced by the default one and reported once
/// the subscriber is up. The returned guard flushes buffered log lines when
/// dropped and must be held until the application exits.
pub(crate) fn init_logging(app_config: &AppConfig) -> Result<WorkerGuard> {
    let log_dir = config::log_dir();
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => config_filter(&app_config.log_level),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(e) = rejected {
        warn!(
            log_level = %app_config.log_level,
            error = %e,
            "Invalid log level in configuration, using default"
        );
    }

    Ok(guard)
}

fn config_filter(log_level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(log_level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(AppConfig::default().log_level), Some(e)),
    }
}
