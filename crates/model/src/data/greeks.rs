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

//! Option *Greeks* result structure and the market reporting convention.

use std::{fmt::Display, ops::Mul};

use serde::{Deserialize, Serialize};

use crate::{
    data::black_scholes::measure,
    enums::{GreeksConvention, OptionKind},
};

/// Delta scale expressing sensitivity per 1% move of the underlying (multiplied by spot).
pub const DELTA_PERCENT_SCALE: f64 = 0.01;

/// Gamma scale expressing sensitivity per (1% move)^2 of the underlying (multiplied by spot^2).
pub const GAMMA_PERCENT_SCALE: f64 = 0.0001;

/// Trading days per year, theta is reported per trading day.
pub const TRADING_DAYS_PER_YEAR: f64 = 240.0;

/// Vega divisor expressing sensitivity per volatility point.
pub const VEGA_POINT_SCALE: f64 = 100.0;

/// Result structure for Black-Scholes-Merton price and Greeks calculations.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "python", pyo3::pyclass(module = "bsm.model", frozen))]
pub struct BlackScholesGreeks {
    pub price: f64,
    pub vol: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl BlackScholesGreeks {
    /// Creates the degenerate result for a non-positive volatility: the given price with every
    /// Greek zero.
    #[must_use]
    pub const fn intrinsic(price: f64, vol: f64) -> Self {
        Self {
            price,
            vol,
            delta: 0.0,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
            rho: 0.0,
        }
    }

    /// Rescales raw Greeks into the market reporting convention for the given spot.
    ///
    /// Price, vol and rho are unchanged.
    #[must_use]
    pub fn to_market(&self, s: f64) -> Self {
        Self {
            price: self.price,
            vol: self.vol,
            delta: market_delta(self.delta, s),
            gamma: market_gamma(self.gamma, s),
            theta: market_theta(self.theta),
            vega: market_vega(self.vega),
            rho: self.rho,
        }
    }

    /// Returns `(price, delta, gamma, rho, theta, vega)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.price, self.delta, self.gamma, self.rho, self.theta, self.vega,
        )
    }
}

impl Display for BlackScholesGreeks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BlackScholesGreeks(price={:.6}, vol={:.2}%, delta={:.6}, gamma={:.6}, theta={:.6}, vega={:.6}, rho={:.6})",
            self.price,
            self.vol * 100.0,
            self.delta,
            self.gamma,
            self.theta,
            self.vega,
            self.rho,
        )
    }
}

// Position scaling: quantity * greeks, vol is not additive
impl Mul<BlackScholesGreeks> for f64 {
    type Output = BlackScholesGreeks;

    fn mul(self, greeks: BlackScholesGreeks) -> BlackScholesGreeks {
        BlackScholesGreeks {
            price: self * greeks.price,
            vol: greeks.vol,
            delta: self * greeks.delta,
            gamma: self * greeks.gamma,
            theta: self * greeks.theta,
            vega: self * greeks.vega,
            rho: self * greeks.rho,
        }
    }
}

/// Converts a raw delta to the change in price for a 1% move in spot.
#[inline(always)]
#[must_use]
pub fn market_delta(delta: f64, s: f64) -> f64 {
    delta * s * DELTA_PERCENT_SCALE
}

/// Converts a raw gamma to the change in delta for a (1% move)^2 in spot.
#[inline(always)]
#[must_use]
pub fn market_gamma(gamma: f64, s: f64) -> f64 {
    gamma * (s * s) * GAMMA_PERCENT_SCALE
}

/// Converts a raw (per year) theta to decay per trading day.
#[inline(always)]
#[must_use]
pub fn market_theta(theta: f64) -> f64 {
    theta / TRADING_DAYS_PER_YEAR
}

/// Converts a raw vega to the change in price per volatility point.
#[inline(always)]
#[must_use]
pub fn market_vega(vega: f64) -> f64 {
    vega / VEGA_POINT_SCALE
}

/// Computes Black-Scholes-Merton price and Greeks in the requested convention.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn black_scholes_greeks(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    vol: f64,
    y: f64,
    kind: OptionKind,
    convention: GreeksConvention,
) -> BlackScholesGreeks {
    let greeks = measure(s, k, r, t, vol, y, kind);
    match convention {
        GreeksConvention::Raw => greeks,
        GreeksConvention::Market => greeks.to_market(s),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn create_test_greeks() -> BlackScholesGreeks {
        BlackScholesGreeks {
            price: 10.0,
            vol: 0.35,
            delta: -0.6,
            gamma: 0.02,
            theta: -4.8,
            vega: 16.0,
            rho: -17.0,
        }
    }

    #[rstest]
    fn test_intrinsic_has_zero_greeks() {
        let g = BlackScholesGreeks::intrinsic(10.0, 0.0);
        assert_eq!(g.price, 10.0);
        assert_eq!(g.vol, 0.0);
        assert_eq!(
            (g.delta, g.gamma, g.theta, g.vega, g.rho),
            (0.0, 0.0, 0.0, 0.0, 0.0)
        );
    }

    #[rstest]
    fn test_to_market_scaling() {
        let g = create_test_greeks().to_market(90.0);

        assert_eq!(g.price, 10.0);
        assert_eq!(g.vol, 0.35);
        assert!((g.delta - (-0.6 * 90.0 * 0.01)).abs() < 1e-15);
        assert!((g.gamma - 0.02 * 8100.0 * 0.0001).abs() < 1e-15);
        assert!((g.theta - (-4.8 / 240.0)).abs() < 1e-15);
        assert!((g.vega - 0.16).abs() < 1e-15);
        assert_eq!(g.rho, -17.0);
    }

    #[rstest]
    fn test_as_tuple_order() {
        let g = create_test_greeks();
        assert_eq!(g.as_tuple(), (10.0, -0.6, 0.02, -17.0, -4.8, 16.0));
    }

    #[rstest]
    fn test_display() {
        let display = create_test_greeks().to_string();
        assert!(display.starts_with("BlackScholesGreeks(price=10.000000, vol=35.00%"));
        assert!(display.contains("rho=-17.000000"));
    }

    #[rstest]
    fn test_quantity_multiplication() {
        let g = 3.0 * create_test_greeks();
        assert_eq!(g.price, 30.0);
        assert_eq!(g.vol, 0.35);
        assert!((g.delta - (-1.8)).abs() < 1e-15);
        assert!((g.gamma - 0.06).abs() < 1e-15);
        assert!((g.theta - (-14.4)).abs() < 1e-12);
        assert_eq!(g.vega, 48.0);
        assert_eq!(g.rho, -51.0);
    }

    #[rstest]
    fn test_black_scholes_greeks_raw_matches_measure() {
        let raw = black_scholes_greeks(
            90.0,
            100.0,
            0.1,
            1.0 / 12.0,
            0.35,
            0.05,
            OptionKind::Call,
            GreeksConvention::Raw,
        );
        let measured = measure(90.0, 100.0, 0.1, 1.0 / 12.0, 0.35, 0.05, OptionKind::Call);
        assert_eq!(raw, measured);
    }

    #[rstest]
    fn test_black_scholes_greeks_market_golden_no_yield_put() {
        let g = black_scholes_greeks(
            90.0,
            100.0,
            0.1,
            0.25,
            0.35,
            0.0,
            OptionKind::Put,
            GreeksConvention::Market,
        );

        assert!((g.price - 10.978_651_191_389_105).abs() < 1e-11);
        assert!((g.delta - (-0.580_448_686_105_584_3)).abs() < 1e-12);
        assert!((g.gamma - 0.019_147_531_595_832_68).abs() < 1e-12);
        assert!((g.theta - (-0.020_106_296_342_719_855)).abs() < 1e-12);
        assert!((g.vega - 0.167_540_901_463_535_98).abs() < 1e-12);
        assert!((g.rho - (-17.255_879_950_486_882)).abs() < 1e-10);
    }

    #[rstest]
    fn test_black_scholes_greeks_market_golden_with_yield() {
        let g = black_scholes_greeks(
            90.0,
            100.0,
            0.1,
            1.0 / 12.0,
            0.35,
            0.05,
            OptionKind::Call,
            GreeksConvention::Market,
        );

        assert!((g.delta - 0.153_073_418_804_004_7).abs() < 1e-12);
        assert!((g.gamma - 0.022_514_400_678_877_92).abs() < 1e-12);
        assert!((g.theta - (-0.060_318_231_088_934_44)).abs() < 1e-12);
        assert!((g.vega - 0.065_667_001_980_060_59).abs() < 1e-12);
    }

    #[rstest]
    fn test_market_convention_at_zero_vol_is_all_zero() {
        let g = black_scholes_greeks(
            110.0,
            100.0,
            0.1,
            0.25,
            0.0,
            0.0,
            OptionKind::Call,
            GreeksConvention::Market,
        );
        assert_eq!(g.price, 10.0);
        assert_eq!(g.delta, 0.0);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.theta, 0.0);
        assert_eq!(g.vega, 0.0);
    }

    #[rstest]
    fn test_serde_round_trip_field_names() {
        let json = serde_json::to_value(create_test_greeks()).unwrap();
        assert_eq!(json["vega"], 16.0);
        assert_eq!(json["rho"], -17.0);
    }
}
