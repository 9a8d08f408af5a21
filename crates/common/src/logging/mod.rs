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

//! Logging for the Black-Scholes-Merton crates.
//!
//! Library code logs through the `log` facade. Binaries install the stdout [`Logger`] with
//! [`init_logging`], or lazily from the `BSM_LOG` environment variable with
//! [`ensure_logging_initialized`].

pub mod config;
pub mod logger;

#[cfg(feature = "tracing-bridge")]
pub mod bridge;

use std::{
    env,
    str::FromStr,
    sync::{
        OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use log::LevelFilter;

pub use self::{
    config::{BSM_LOG_ENV, LoggerConfig},
    logger::Logger,
};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);
static LOGGING_COLORED: AtomicBool = AtomicBool::new(true);
static LAZY_INIT: OnceLock<bool> = OnceLock::new();

/// Returns whether the logger is installed.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Returns whether the logger is using ANSI colors.
pub fn logging_is_colored() -> bool {
    LOGGING_COLORED.load(Ordering::Relaxed)
}

/// Ensures logging is initialized on first use.
///
/// If `BSM_LOG` is set and valid, initializes the logger with that config, otherwise with the
/// default config (INFO level to stdout).
///
/// Returns `true` if logging is available (either already initialized or successfully
/// lazy-initialized), `false` otherwise.
pub fn ensure_logging_initialized() -> bool {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return true;
    }

    LAZY_INIT.get_or_init(|| {
        let config = env::var(BSM_LOG_ENV)
            .ok()
            .and_then(|spec| LoggerConfig::from_spec(&spec).ok())
            .unwrap_or_default();

        init_logging(config).is_ok()
    });

    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}

/// Initializes logging with the given config.
///
/// Should only be called once per process, ideally at the start of `main`.
///
/// # Errors
///
/// Returns an error if a logger is already installed, or if `use_tracing` is set and the
/// tracing subscriber fails to initialize.
pub fn init_logging(config: LoggerConfig) -> anyhow::Result<()> {
    let use_tracing = config.use_tracing;
    Logger::init_with_config(config)?;

    if use_tracing {
        #[cfg(feature = "tracing-bridge")]
        bridge::init_tracing()?;

        #[cfg(not(feature = "tracing-bridge"))]
        log::warn!("`use_tracing` requested but the `tracing-bridge` feature is disabled");
    }

    Ok(())
}

/// Parses a string into a [`LevelFilter`].
///
/// # Errors
///
/// Returns an error if the provided string is not a valid `LevelFilter`.
pub fn parse_level_filter_str(s: &str) -> anyhow::Result<LevelFilter> {
    let mut log_level_str = s.to_uppercase();
    if log_level_str == "WARNING" {
        log_level_str = "WARN".to_string();
    }
    LevelFilter::from_str(&log_level_str)
        .map_err(|_| anyhow::anyhow!("Invalid log level string: '{s}'"))
}
