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

//! Logging configuration and parsing.
//!
//! # Spec String Format
//!
//! The `BSM_LOG` environment variable uses a semicolon-separated format:
//!
//! ```text
//! stdout=Debug;bsm_model::data::implied_vol=Trace;is_colored=false
//! ```
//!
//! ## Supported Keys
//!
//! | Key                | Type      | Description                                   |
//! |--------------------|-----------|-----------------------------------------------|
//! | `stdout`           | Log level | Maximum level for stdout output.              |
//! | `is_colored`       | Boolean   | Enable ANSI colors (default: true).           |
//! | `print_config`     | Boolean   | Print config to stdout at startup.            |
//! | `log_modules_only` | Boolean   | Only log targets with an explicit filter.     |
//! | `use_tracing`      | Boolean   | Enable the tracing subscriber bridge.         |
//! | `<target>`         | Log level | Level for a log target (longest prefix wins). |
//!
//! Levels are case-insensitive (`Off`, `Error`, `Warn`, `Info`, `Debug`, `Trace`).
//! Booleans may be bare flags (`is_colored`) or explicit (`is_colored=false`, `=0`, `=no`).

use std::{env, str::FromStr};

use ahash::AHashMap;
use log::LevelFilter;
use ustr::Ustr;

/// Environment variable holding the logging spec string.
pub const BSM_LOG_ENV: &str = "BSM_LOG";

/// Configuration for the stdout logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Maximum log level for stdout output.
    pub stdout_level: LevelFilter,
    /// Per log target overrides, matched by prefix (`bsm_model`, `bsm_model::data`).
    pub module_level: AHashMap<Ustr, LevelFilter>,
    /// Log only targets with explicit level filters.
    pub log_modules_only: bool,
    pub is_colored: bool,
    pub print_config: bool,
    /// Initialize the tracing subscriber bridge (requires the `tracing-bridge` feature).
    pub use_tracing: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            stdout_level: LevelFilter::Info,
            module_level: AHashMap::new(),
            log_modules_only: false,
            is_colored: true,
            print_config: false,
            use_tracing: false,
        }
    }
}

impl LoggerConfig {
    /// Parses a configuration from a spec string.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec string contains an unknown flag or an invalid log level.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();

        for kv in spec.split(';') {
            let kv = kv.trim();
            if kv.is_empty() {
                continue;
            }

            let Some((k, v)) = kv.split_once('=') else {
                match kv.to_lowercase().as_str() {
                    "log_modules_only" => config.log_modules_only = true,
                    "is_colored" => config.is_colored = true,
                    "print_config" => config.print_config = true,
                    "use_tracing" => config.use_tracing = true,
                    _ => anyhow::bail!("Invalid spec pair: {kv}"),
                }
                continue;
            };

            let k = k.trim();
            let v = v.trim();

            match k.to_lowercase().as_str() {
                "is_colored" => config.is_colored = parse_bool_value(v),
                "log_modules_only" => config.log_modules_only = parse_bool_value(v),
                "print_config" => config.print_config = parse_bool_value(v),
                "use_tracing" => config.use_tracing = parse_bool_value(v),
                "stdout" => config.stdout_level = parse_level(v)?,
                _ => {
                    if k.is_empty() {
                        anyhow::bail!("Invalid spec pair: {kv}");
                    }
                    config.module_level.insert(Ustr::from(k), parse_level(v)?);
                }
            }
        }

        Ok(config)
    }

    /// Parses configuration from the `BSM_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or contains invalid syntax.
    pub fn from_env() -> anyhow::Result<Self> {
        let spec = env::var(BSM_LOG_ENV)?;
        Self::from_spec(&spec)
    }

    /// Returns the module filters sorted by descending path length.
    #[must_use]
    pub fn module_filters_sorted(&self) -> Vec<(Ustr, LevelFilter)> {
        let mut filters: Vec<(Ustr, LevelFilter)> =
            self.module_level.iter().map(|(k, v)| (*k, *v)).collect();
        filters.sort_by(|a, b| {
            b.0.len()
                .cmp(&a.0.len())
                .then_with(|| a.0.as_str().cmp(b.0.as_str()))
        });
        filters
    }

    /// Returns the most verbose level any record can pass with this config.
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        let module_max = self.module_level.values().copied().max();
        if self.log_modules_only {
            return module_max.unwrap_or(LevelFilter::Off);
        }
        // Errors bypass the stdout level
        let base = self.stdout_level.max(LevelFilter::Error);
        module_max.map_or(base, |m| m.max(base))
    }
}

/// Returns `true` unless the value is "false", "0" or "no" (case-insensitive).
fn parse_bool_value(v: &str) -> bool {
    !matches!(v.to_lowercase().as_str(), "false" | "0" | "no")
}

fn parse_level(v: &str) -> anyhow::Result<LevelFilter> {
    LevelFilter::from_str(v).map_err(|_| anyhow::anyhow!("Invalid log level: {v}"))
}
