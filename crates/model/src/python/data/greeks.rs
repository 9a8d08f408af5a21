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

use pyo3::prelude::*;

use crate::{
    data::{
        black_scholes::{measure, price},
        greeks::{BlackScholesGreeks, black_scholes_greeks},
        implied_vol::imply_vol,
    },
    enums::{GreeksConvention, OptionKind},
};

#[pymethods]
impl BlackScholesGreeks {
    #[getter]
    fn price(&self) -> f64 {
        self.price
    }

    #[getter]
    fn vol(&self) -> f64 {
        self.vol
    }

    #[getter]
    fn delta(&self) -> f64 {
        self.delta
    }

    #[getter]
    fn gamma(&self) -> f64 {
        self.gamma
    }

    #[getter]
    fn theta(&self) -> f64 {
        self.theta
    }

    #[getter]
    fn vega(&self) -> f64 {
        self.vega
    }

    #[getter]
    fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns `(price, delta, gamma, rho, theta, vega)`.
    #[pyo3(name = "as_tuple")]
    fn py_as_tuple(&self) -> (f64, f64, f64, f64, f64, f64) {
        self.as_tuple()
    }

    fn __repr__(&self) -> String {
        self.to_string()
    }
}

/// Computes the Black-Scholes-Merton price of a European option.
///
/// # Errors
///
/// Returns a `PyErr` if argument conversion fails.
#[pyfunction]
#[pyo3(name = "black_scholes_price")]
pub fn py_black_scholes_price(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    vol: f64,
    y: f64,
    is_call: bool,
) -> PyResult<f64> {
    Ok(price(s, k, r, t, vol, y, OptionKind::from_is_call(is_call)))
}

/// Computes price and raw Greeks in a single pass.
///
/// # Errors
///
/// Returns a `PyErr` if argument conversion fails.
#[pyfunction]
#[pyo3(name = "black_scholes_measure")]
pub fn py_black_scholes_measure(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    vol: f64,
    y: f64,
    is_call: bool,
) -> PyResult<BlackScholesGreeks> {
    Ok(measure(s, k, r, t, vol, y, OptionKind::from_is_call(is_call)))
}

/// Computes price and Greeks, rescaled to the market convention when `market` is true.
///
/// # Errors
///
/// Returns a `PyErr` if argument conversion fails.
#[pyfunction]
#[pyo3(name = "black_scholes_greeks", signature = (s, k, r, t, vol, y, is_call, market = false))]
#[allow(clippy::too_many_arguments)]
pub fn py_black_scholes_greeks(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    vol: f64,
    y: f64,
    is_call: bool,
    market: bool,
) -> PyResult<BlackScholesGreeks> {
    let convention = if market {
        GreeksConvention::Market
    } else {
        GreeksConvention::Raw
    };
    Ok(black_scholes_greeks(
        s,
        k,
        r,
        t,
        vol,
        y,
        OptionKind::from_is_call(is_call),
        convention,
    ))
}

/// Computes the implied volatility for an observed option price.
///
/// Returns `0.0` when no volatility can be implied.
///
/// # Errors
///
/// Returns a `PyErr` if argument conversion fails.
#[pyfunction]
#[pyo3(name = "imply_vol")]
pub fn py_imply_vol(price: f64, s: f64, k: f64, r: f64, t: f64, is_call: bool) -> PyResult<f64> {
    Ok(imply_vol(price, s, k, r, t, OptionKind::from_is_call(is_call)))
}
