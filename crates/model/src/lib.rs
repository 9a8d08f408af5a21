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

//! European option pricing under the Black-Scholes-Merton model.
//!
//! - `data::black_scholes`: closed-form price and Greeks with a continuous dividend yield.
//! - `data::greeks`: the Greeks result type and the market reporting convention.
//! - `data::implied_vol`: Newton-Raphson implied volatility solver.
//! - `data::contract`: an option contract value type bundling the model inputs.
//!
//! # Feature flags
//!
//! - `python`: Enables Python bindings from [PyO3](https://pyo3.rs).
//! - `extension-module`: Builds as a Python extension module (used with `python`).

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

pub mod data;
pub mod enums;

#[cfg(feature = "python")]
pub mod python;
