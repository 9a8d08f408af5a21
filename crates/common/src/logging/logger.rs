// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::{
    fmt::Display,
    io::{self, Write},
    sync::atomic::Ordering,
};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, set_boxed_logger, set_max_level};
use ustr::Ustr;

use super::config::LoggerConfig;

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";

/// Returns the ANSI color prefix for a log level.
#[must_use]
pub const fn level_ansi(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[1;31m",
        Level::Warn => "\x1b[1;33m",
        Level::Info => "",
        Level::Debug => "\x1b[36m",
        Level::Trace => "\x1b[35m",
    }
}

/// A formatted log record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: Ustr,
    pub message: String,
}

/// Formats a timestamp as ISO 8601 with nanosecond precision.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.9fZ").to_string()
}

impl LogLine {
    /// Returns the line with a trailing newline and no color codes.
    #[must_use]
    pub fn get_string(&self) -> String {
        format!("{self}\n")
    }

    /// Returns the line with a trailing newline and ANSI color codes.
    #[must_use]
    pub fn get_colored(&self) -> String {
        format!(
            "{ANSI_BOLD}{}{ANSI_RESET} {}[{}] {}: {}{ANSI_RESET}\n",
            format_timestamp(self.timestamp),
            level_ansi(self.level),
            self.level,
            self.target,
            self.message,
        )
    }
}

impl Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            format_timestamp(self.timestamp),
            self.level,
            self.target,
            self.message,
        )
    }
}

/// Determines if a log record should be filtered out.
///
/// Returns `true` if the record should be skipped, `false` if it should be logged.
///
/// The `module_filters_sorted` slice must be pre-sorted by descending path length so the
/// first `starts_with` match is the longest prefix. A matching module filter takes precedence
/// over `stdout_level`; errors bypass `stdout_level` only.
#[must_use]
pub fn should_filter_log(
    target: &str,
    line_level: Level,
    module_filters_sorted: &[(Ustr, LevelFilter)],
    stdout_level: LevelFilter,
    log_modules_only: bool,
) -> bool {
    let module_filter = module_filters_sorted
        .iter()
        .find(|(path, _)| target.starts_with(path.as_str()))
        .map(|(_, level)| *level);

    match module_filter {
        Some(filter_level) => line_level > filter_level,
        None if log_modules_only => true,
        None => line_level != Level::Error && line_level > stdout_level,
    }
}

/// A synchronous `log` implementation writing to stdout, with errors to stderr.
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
    module_filters: Vec<(Ustr, LevelFilter)>,
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        !should_filter_log(
            metadata.target(),
            metadata.level(),
            &self.module_filters,
            self.config.stdout_level,
            self.config.log_modules_only,
        )
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: Ustr::from(record.target()),
            message: format!("{}", record.args()),
        };
        let output = if self.config.is_colored {
            line.get_colored()
        } else {
            line.get_string()
        };

        let result = if line.level == Level::Error {
            io::stderr().lock().write_all(output.as_bytes())
        } else {
            io::stdout().lock().write_all(output.as_bytes())
        };
        if let Err(e) = result {
            eprintln!("Error writing log line: {e:?}");
        }
    }

    fn flush(&self) {
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error flushing stdout: {e:?}");
        }
    }
}

impl Logger {
    /// Creates a new [`Logger`] instance.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let module_filters = config.module_filters_sorted();
        Self {
            config,
            module_filters,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Initializes the logger based on the `BSM_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the environment variable or parsing the configuration fails.
    pub fn init_with_env() -> anyhow::Result<()> {
        let config = LoggerConfig::from_env()?;
        Self::init_with_config(config)
    }

    /// Registers the logger as the global `log` implementation.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger is already set.
    pub fn init_with_config(config: LoggerConfig) -> anyhow::Result<()> {
        if super::LOGGING_INITIALIZED.load(Ordering::SeqCst) {
            anyhow::bail!("Logging already initialized");
        }

        let max_level = config.max_level();
        let is_colored = config.is_colored;
        let print_config = config.print_config;
        if print_config {
            println!("Logger initialized with {config:?}");
        }

        set_boxed_logger(Box::new(Self::new(config)))?;
        set_max_level(max_level);

        if print_config {
            println!("Logger set as `log` implementation with max level {max_level}");
        }

        super::LOGGING_INITIALIZED.store(true, Ordering::SeqCst);
        super::LOGGING_COLORED.store(is_colored, Ordering::SeqCst);
        Ok(())
    }
}
