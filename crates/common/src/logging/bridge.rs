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

//! Tracing subscriber for dependencies that emit `tracing` events.
//!
//! Enabled with `use_tracing` in the `BSM_LOG` spec. Filtering is controlled by `RUST_LOG`:
//!
//! ```text
//! BSM_LOG="stdout=Info;use_tracing" RUST_LOG=warn bsm-measure
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, FmtContext, FormatEvent, FormatFields, format::Writer},
    prelude::*,
    registry::LookupSpan,
};

use super::logger::format_timestamp;

static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

struct LineFormatter;

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} [{}] {}: ",
            format_timestamp(Utc::now()),
            metadata.level(),
            metadata.target(),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Returns whether the tracing subscriber has been initialized.
#[must_use]
pub fn tracing_is_initialized() -> bool {
    TRACING_INITIALIZED.load(Ordering::Relaxed)
}

/// Initializes a tracing subscriber writing to stdout.
///
/// Lines use the same `timestamp [LEVEL] target: message` layout as the stdout [`Logger`].
/// `RUST_LOG` selects targets and levels, defaulting to `warn`.
///
/// [`Logger`]: super::logger::Logger
///
/// # Errors
///
/// Returns an error if the tracing subscriber has already been initialized.
pub fn init_tracing() -> anyhow::Result<()> {
    if TRACING_INITIALIZED.load(Ordering::SeqCst) {
        anyhow::bail!("Tracing subscriber already initialized");
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().event_format(LineFormatter))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))?;

    TRACING_INITIALIZED.store(true, Ordering::SeqCst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_init_tracing_second_call_fails() {
        let first = init_tracing();
        assert_eq!(first.is_ok(), tracing_is_initialized());
        assert!(init_tracing().is_err());
    }
}
