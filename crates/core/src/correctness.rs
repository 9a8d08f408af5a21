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

//! Functions for checking the correctness of caller-supplied arguments.
//!
//! The pricing kernels never call these: they are intended for callers who want to reject
//! inputs before handing them to a kernel whose degenerate outputs are part of its contract.

/// Checks the `f64` value is finite (not NaN or infinite).
///
/// # Errors
///
/// Returns an error if the validation check fails.
pub fn check_finite_f64(value: f64, param: &str) -> anyhow::Result<()> {
    if !value.is_finite() {
        anyhow::bail!("invalid f64 for '{param}', was {value}")
    }
    Ok(())
}

/// Checks the `f64` value is finite and strictly positive (> 0).
///
/// # Errors
///
/// Returns an error if the validation check fails.
pub fn check_positive_f64(value: f64, param: &str) -> anyhow::Result<()> {
    check_finite_f64(value, param)?;
    if value <= 0.0 {
        anyhow::bail!("invalid f64 for '{param}' not positive, was {value}")
    }
    Ok(())
}

/// Checks the `f64` value is finite and non-negative (>= 0).
///
/// # Errors
///
/// Returns an error if the validation check fails.
pub fn check_non_negative_f64(value: f64, param: &str) -> anyhow::Result<()> {
    check_finite_f64(value, param)?;
    if value < 0.0 {
        anyhow::bail!("invalid f64 for '{param}' negative, was {value}")
    }
    Ok(())
}
