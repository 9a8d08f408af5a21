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

//! Closed-form Black-Scholes-Merton pricing kernel for European vanilla options.
//!
//! All functions take the same scalar arguments:
//!
//! - `s`: spot price of the underlying.
//! - `k`: strike price.
//! - `r`: continuously-compounded risk-free rate.
//! - `t`: time to expiry in years.
//! - `vol`: annualized volatility.
//! - `y`: continuous dividend (carry) yield, `0.0` when not modeled.
//! - `kind`: call or put.
//!
//! Greeks returned here are *raw* analytic sensitivities. See [`crate::data::greeks`] for the
//! market-scaled reporting convention.
//!
//! A non-positive `vol` collapses the model to undiscounted intrinsic value: the price becomes
//! `max(0, phi * (s - k))` and every Greek is exactly `0.0`. No other input is validated.

// dS_t = S_t * ((r - y) * dt + vol * dW_t) (stock)
// dC_t = r * C_t * dt (cash numeraire)

use bsm_core::math::{norm_cdf, norm_pdf};

use crate::{data::greeks::BlackScholesGreeks, enums::OptionKind};

/// Returns `d1 = (ln(s / k) + (r - y + vol^2 / 2) * t) / (vol * sqrt(t))`.
#[inline(always)]
#[must_use]
pub fn d1(s: f64, k: f64, r: f64, t: f64, vol: f64, y: f64) -> f64 {
    ((s / k).ln() + (r - y + 0.5 * vol * vol) * t) / (vol * t.sqrt())
}

/// Returns `d2 = d1 - vol * sqrt(t)`.
#[inline(always)]
#[must_use]
pub fn d2(d1: f64, vol: f64, t: f64) -> f64 {
    d1 - vol * t.sqrt()
}

/// Returns the undiscounted intrinsic value `max(0, phi * (s - k))`.
#[inline(always)]
#[must_use]
pub fn intrinsic_value(s: f64, k: f64, kind: OptionKind) -> f64 {
    f64::max(0.0, kind.sign() * (s - k))
}

/// Returns the option price.
#[must_use]
pub fn price(s: f64, k: f64, r: f64, t: f64, vol: f64, y: f64, kind: OptionKind) -> f64 {
    if vol <= 0.0 {
        return intrinsic_value(s, k, kind);
    }

    let phi = kind.sign();
    let d1 = d1(s, k, r, t, vol, y);
    let d2 = d2(d1, vol, t);

    phi * (s * (-y * t).exp() * norm_cdf(phi * d1) - k * (-r * t).exp() * norm_cdf(phi * d2))
}

/// Returns delta, the sensitivity of the price to a unit move in spot.
#[must_use]
pub fn delta(s: f64, k: f64, r: f64, t: f64, vol: f64, y: f64, kind: OptionKind) -> f64 {
    if vol <= 0.0 {
        return 0.0;
    }

    let phi = kind.sign();
    phi * (-y * t).exp() * norm_cdf(phi * d1(s, k, r, t, vol, y))
}

/// Returns gamma, the sensitivity of delta to a unit move in spot.
///
/// Gamma is identical for calls and puts.
#[must_use]
pub fn gamma(s: f64, k: f64, r: f64, t: f64, vol: f64, y: f64) -> f64 {
    if vol <= 0.0 {
        return 0.0;
    }

    let d1 = d1(s, k, r, t, vol, y);
    norm_pdf(d1) / (s * vol * t.sqrt()) * (-y * t).exp()
}

/// Returns theta, the rate of change of the price per year of calendar time.
#[must_use]
pub fn theta(s: f64, k: f64, r: f64, t: f64, vol: f64, y: f64, kind: OptionKind) -> f64 {
    if vol <= 0.0 {
        return 0.0;
    }

    let phi = kind.sign();
    let sqrt_t = t.sqrt();
    let d1 = d1(s, k, r, t, vol, y);
    let d2 = d1 - vol * sqrt_t;
    let yield_disc = (-y * t).exp();

    -0.5 * yield_disc * norm_pdf(d1) * s * vol / sqrt_t
        - phi * r * k * (-r * t).exp() * norm_cdf(phi * d2)
        + phi * y * s * yield_disc * norm_cdf(phi * d1)
}

/// Returns vega, the sensitivity of the price to a unit (100 point) move in volatility.
///
/// Vega is identical for calls and puts. This is the value the implied volatility solver
/// divides by.
#[must_use]
pub fn vega(s: f64, k: f64, r: f64, t: f64, vol: f64, y: f64) -> f64 {
    if vol <= 0.0 {
        return 0.0;
    }

    let sqrt_t = t.sqrt();
    s * (-y * t).exp() * norm_pdf(d1(s, k, r, t, vol, y)) * sqrt_t
}

/// Returns rho, the sensitivity of the price to a unit move in the risk-free rate.
#[must_use]
pub fn rho(s: f64, k: f64, r: f64, t: f64, vol: f64, y: f64, kind: OptionKind) -> f64 {
    if vol <= 0.0 {
        return 0.0;
    }

    let phi = kind.sign();
    let d2 = d2(d1(s, k, r, t, vol, y), vol, t);
    phi * k * t * (-r * t).exp() * norm_cdf(phi * d2)
}

/// Lightweight kernel for the implied volatility search: only computes price and raw vega.
///
/// Agrees exactly with [`price`] and [`vega`] for the same inputs.
#[inline(always)]
#[must_use]
pub fn price_and_vega(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    vol: f64,
    y: f64,
    kind: OptionKind,
) -> (f64, f64) {
    if vol <= 0.0 {
        return (intrinsic_value(s, k, kind), 0.0);
    }

    let phi = kind.sign();
    let sqrt_t = t.sqrt();
    let d1 = d1(s, k, r, t, vol, y);
    let d2 = d1 - vol * sqrt_t;
    let yield_disc = (-y * t).exp();

    let price =
        phi * (s * yield_disc * norm_cdf(phi * d1) - k * (-r * t).exp() * norm_cdf(phi * d2));
    let vega = s * yield_disc * norm_pdf(d1) * sqrt_t;

    (price, vega)
}

/// Computes the price and all five raw Greeks in a single pass.
///
/// `d1`, `d2`, both discount factors and the distribution values are evaluated once and shared.
#[must_use]
pub fn measure(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    vol: f64,
    y: f64,
    kind: OptionKind,
) -> BlackScholesGreeks {
    if vol <= 0.0 {
        return BlackScholesGreeks::intrinsic(intrinsic_value(s, k, kind), vol);
    }

    let phi = kind.sign();
    let sqrt_t = t.sqrt();
    let d1 = d1(s, k, r, t, vol, y);
    let d2 = d1 - vol * sqrt_t;
    let pdf_d1 = norm_pdf(d1);
    let riskless_disc = (-r * t).exp();
    let yield_disc = (-y * t).exp();
    let cdf_phi_d1 = norm_cdf(phi * d1);
    let cdf_phi_d2 = norm_cdf(phi * d2);

    let delta = phi * yield_disc * cdf_phi_d1;
    let price = s * delta - phi * k * cdf_phi_d2 * riskless_disc;
    let theta = -0.5 * yield_disc * pdf_d1 * s * vol / sqrt_t
        - phi * r * k * riskless_disc * cdf_phi_d2
        + phi * y * s * yield_disc * cdf_phi_d1;
    let rho = phi * k * t * riskless_disc * cdf_phi_d2;
    let vega = s * yield_disc * pdf_d1 * sqrt_t;
    let gamma = pdf_d1 / (s * vol * sqrt_t) * yield_disc;

    BlackScholesGreeks {
        price,
        vol,
        delta,
        gamma,
        theta,
        vega,
        rho,
    }
}
