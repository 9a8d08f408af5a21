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

use std::fmt::Display;

use bsm_core::correctness::{check_finite_f64, check_non_negative_f64, check_positive_f64};
use serde::{Deserialize, Serialize};

use crate::{
    data::{
        black_scholes::{intrinsic_value, measure, price},
        greeks::{BlackScholesGreeks, black_scholes_greeks},
        implied_vol::imply_vol,
    },
    enums::{GreeksConvention, OptionKind},
};

/// The parameters of a European vanilla option under the Black-Scholes-Merton model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub spot: f64,
    pub strike: f64,
    /// Continuously-compounded risk-free rate.
    pub rate: f64,
    /// Time to expiry in years.
    pub time_to_expiry: f64,
    /// Annualized volatility.
    pub vol: f64,
    /// Continuous dividend (carry) yield.
    #[serde(default)]
    pub dividend_yield: f64,
    pub kind: OptionKind,
}

impl OptionContract {
    /// Creates a new [`OptionContract`] instance.
    ///
    /// No validation is performed, see [`OptionContract::validate`].
    #[must_use]
    pub const fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        time_to_expiry: f64,
        vol: f64,
        dividend_yield: f64,
        kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            time_to_expiry,
            vol,
            dividend_yield,
            kind,
        }
    }

    /// Returns a copy of the contract with a different volatility.
    #[must_use]
    pub const fn with_vol(mut self, vol: f64) -> Self {
        self.vol = vol;
        self
    }

    /// Checks the parameters describe a well-formed contract.
    ///
    /// The pricing methods never call this: degenerate inputs keep their defined outputs unless
    /// the caller opts in to rejecting them here.
    ///
    /// # Errors
    ///
    /// Returns an error if spot, strike or time to expiry is not positive, vol is negative, or
    /// any parameter is not finite.
    pub fn validate(&self) -> anyhow::Result<()> {
        check_positive_f64(self.spot, stringify!(spot))?;
        check_positive_f64(self.strike, stringify!(strike))?;
        check_finite_f64(self.rate, stringify!(rate))?;
        check_positive_f64(self.time_to_expiry, stringify!(time_to_expiry))?;
        check_non_negative_f64(self.vol, stringify!(vol))?;
        check_finite_f64(self.dividend_yield, stringify!(dividend_yield))?;
        Ok(())
    }

    /// Returns the spot discounted at the dividend yield, `s * e^(-y * t)`.
    #[must_use]
    pub fn yield_adjusted_spot(&self) -> f64 {
        self.spot * (-self.dividend_yield * self.time_to_expiry).exp()
    }

    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        intrinsic_value(self.spot, self.strike, self.kind)
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        price(
            self.spot,
            self.strike,
            self.rate,
            self.time_to_expiry,
            self.vol,
            self.dividend_yield,
            self.kind,
        )
    }

    /// Returns the price and raw Greeks.
    #[must_use]
    pub fn measure(&self) -> BlackScholesGreeks {
        measure(
            self.spot,
            self.strike,
            self.rate,
            self.time_to_expiry,
            self.vol,
            self.dividend_yield,
            self.kind,
        )
    }

    #[must_use]
    pub fn greeks(&self, convention: GreeksConvention) -> BlackScholesGreeks {
        black_scholes_greeks(
            self.spot,
            self.strike,
            self.rate,
            self.time_to_expiry,
            self.vol,
            self.dividend_yield,
            self.kind,
            convention,
        )
    }

    /// Returns the implied volatility for an observed price, or `0.0` if none is found.
    ///
    /// The contract's own `vol` is not used. The dividend yield is folded into the spot
    /// (`s * e^(-y * t)`), which prices identically under the zero-yield search.
    #[must_use]
    pub fn implied_vol(&self, observed_price: f64) -> f64 {
        imply_vol(
            observed_price,
            self.yield_adjusted_spot(),
            self.strike,
            self.rate,
            self.time_to_expiry,
            self.kind,
        )
    }
}

impl Display for OptionContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OptionContract(kind={}, spot={}, strike={}, rate={}, time_to_expiry={}, vol={}, dividend_yield={})",
            self.kind,
            self.spot,
            self.strike,
            self.rate,
            self.time_to_expiry,
            self.vol,
            self.dividend_yield,
        )
    }
}
