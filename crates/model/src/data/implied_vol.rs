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

//! Implied volatility by Newton-Raphson iteration on the Black-Scholes price.
//!
//! The search is a plain undamped Newton iteration on volatility using the *raw* vega:
//!
//! 1. Reject a non-positive observed price.
//! 2. Reject an observed price at or below the no-arbitrage floor: `(s - k) * e^(-r * t)` for a
//!    call, `k * e^(-r * t) - s` for a put.
//! 3. Starting from `initial_guess`, repeat up to `max_iterations` times: stop when vega is
//!    exactly zero, stop when `|dx| < tolerance` where `dx = (observed - price) / vega`,
//!    otherwise step `vol += dx`.
//! 4. Reject a terminal volatility that is not strictly positive.
//!
//! [`imply_vol`] follows the sentinel convention: any rejection is reported as `0.0`.
//! [`ImpliedVolSolver::try_solve`] reports the same outcomes as an [`ImpliedVolError`].

use std::cmp::Ordering;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use thiserror::Error;

use crate::{data::black_scholes::price_and_vega, enums::OptionKind};

/// Initial volatility guess (30%).
pub const DEFAULT_INITIAL_VOL: f64 = 0.3;

/// Maximum number of Newton iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Convergence threshold on the absolute Newton step.
pub const DEFAULT_TOLERANCE: f64 = 0.00001;

/// How the Newton loop terminated.
#[derive(Copy, Clone, Debug, Display, AsRefStr, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolverTermination {
    /// The Newton step fell below the tolerance.
    Converged,
    /// Vega evaluated to exactly zero, no further progress possible.
    VegaExhausted,
    /// The iteration cap was reached.
    MaxIterations,
}

/// Reasons an implied volatility could not be found.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ImpliedVolError {
    #[error("observed price {price} is not positive")]
    NonPositivePrice { price: f64 },
    #[error("observed price {price} does not exceed the no-arbitrage bound {bound}")]
    BelowArbitrageBound { price: f64, bound: f64 },
    #[error("search terminated at non-positive volatility {vol} after {iterations} iterations")]
    NonPositiveVol { vol: f64, iterations: usize },
    #[error("search terminated at volatility {vol} above the maximum {max_vol}")]
    AboveMaxVol { vol: f64, max_vol: f64 },
}

/// A successful implied volatility search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImpliedVolSolution {
    pub vol: f64,
    /// Number of price/vega evaluations performed.
    pub iterations: usize,
    pub termination: SolverTermination,
}

/// Configuration for the Newton implied volatility search.
///
/// The defaults give the plain search described in the module docs. `max_vol` is an opt-in
/// ceiling which rejects runaway iterates (deep out-of-the-money quotes can step to absurd
/// volatilities).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, derive(Debug))]
#[serde(default)]
pub struct ImpliedVolSolver {
    pub initial_guess: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
    #[builder(setter(strip_option))]
    pub max_vol: Option<f64>,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_VOL,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            max_vol: None,
        }
    }
}

impl ImpliedVolSolver {
    /// Returns the volatility-independent lower bound an observed price must exceed.
    #[must_use]
    pub fn arbitrage_bound(s: f64, k: f64, r: f64, t: f64, kind: OptionKind) -> f64 {
        let disc = (-r * t).exp();
        match kind {
            OptionKind::Call => (s - k) * disc,
            OptionKind::Put => k * disc - s,
        }
    }

    /// Searches for the volatility reproducing `price`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `price` is not positive.
    /// - `price` does not exceed the no-arbitrage bound.
    /// - The search terminates at a non-positive volatility.
    /// - `max_vol` is set and the search terminates above it.
    pub fn try_solve(
        &self,
        price: f64,
        s: f64,
        k: f64,
        r: f64,
        t: f64,
        kind: OptionKind,
    ) -> Result<ImpliedVolSolution, ImpliedVolError> {
        if price <= 0.0 {
            return Err(ImpliedVolError::NonPositivePrice { price });
        }

        let bound = Self::arbitrage_bound(s, k, r, t, kind);
        if price.partial_cmp(&bound) != Some(Ordering::Greater) {
            return Err(ImpliedVolError::BelowArbitrageBound { price, bound });
        }

        let mut vol = self.initial_guess;
        let mut iterations = 0;
        let mut termination = SolverTermination::MaxIterations;

        while iterations < self.max_iterations {
            iterations += 1;

            let (model_price, vega) = price_and_vega(s, k, r, t, vol, 0.0, kind);
            if vega == 0.0 {
                termination = SolverTermination::VegaExhausted;
                break;
            }

            let dx = (price - model_price) / vega;
            log::trace!(
                "Iteration {iterations}: vol={vol}, price={model_price}, vega={vega}, dx={dx}"
            );

            if dx.abs() < self.tolerance {
                termination = SolverTermination::Converged;
                break;
            }

            vol += dx;
        }

        log::debug!(
            "Implied vol search for {kind} ended {termination} after {iterations} iterations: vol={vol}"
        );

        if vol <= 0.0 {
            return Err(ImpliedVolError::NonPositiveVol { vol, iterations });
        }

        if let Some(max_vol) = self.max_vol
            && vol > max_vol
        {
            return Err(ImpliedVolError::AboveMaxVol { vol, max_vol });
        }

        Ok(ImpliedVolSolution {
            vol,
            iterations,
            termination,
        })
    }

    /// Searches for the volatility reproducing `price`, returning `0.0` when none is found.
    #[must_use]
    pub fn solve(&self, price: f64, s: f64, k: f64, r: f64, t: f64, kind: OptionKind) -> f64 {
        match self.try_solve(price, s, k, r, t, kind) {
            Ok(solution) => solution.vol,
            Err(e) => {
                log::debug!("No implied vol: {e}");
                0.0
            }
        }
    }
}

/// Computes the implied volatility of a European option from its observed price.
///
/// Returns `0.0` when the price is non-positive, violates the no-arbitrage bound, or the search
/// ends at a non-positive volatility.
#[must_use]
pub fn imply_vol(price: f64, s: f64, k: f64, r: f64, t: f64, kind: OptionKind) -> f64 {
    ImpliedVolSolver::default().solve(price, s, k, r, t, kind)
}

#[cfg(test)]
mod tests {
    use implied_vol::{DefaultSpecialFn, ImpliedBlackVolatility};
    use rstest::*;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::data::black_scholes::price;

    #[fixture]
    fn solver() -> ImpliedVolSolver {
        ImpliedVolSolver::default()
    }

    #[rstest]
    fn test_default_configuration() {
        let solver = ImpliedVolSolver::default();
        assert_eq!(solver.initial_guess, 0.3);
        assert_eq!(solver.max_iterations, 50);
        assert_eq!(solver.tolerance, 0.00001);
        assert_eq!(solver.max_vol, None);
    }

    #[rstest]
    fn test_builder_defaults_and_overrides() {
        let solver = ImpliedVolSolverBuilder::default()
            .max_iterations(10)
            .max_vol(5.0)
            .build()
            .unwrap();
        assert_eq!(solver.initial_guess, DEFAULT_INITIAL_VOL);
        assert_eq!(solver.max_iterations, 10);
        assert_eq!(solver.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(solver.max_vol, Some(5.0));
    }

    #[rstest]
    fn test_deserialize_partial_config() {
        let solver: ImpliedVolSolver = serde_json::from_str(r#"{"max_vol": 4.0}"#).unwrap();
        assert_eq!(solver.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(solver.max_vol, Some(4.0));
    }

    #[rstest]
    #[case(0.05)]
    #[case(0.1)]
    #[case(0.2)]
    #[case(0.35)]
    #[case(0.5)]
    #[case(1.0)]
    #[case(1.5)]
    #[case(2.0)]
    fn test_round_trip_recovers_vol(#[case] vol: f64) {
        let (s, k, r, t) = (100.0, 100.0, 0.05, 0.5);
        for kind in OptionKind::iter() {
            let p = price(s, k, r, t, vol, 0.0, kind);
            let implied = imply_vol(p, s, k, r, t, kind);
            assert!(
                (implied - vol).abs() < 1e-4,
                "{kind}: implied={implied}, vol={vol}"
            );
        }
    }

    #[rstest]
    fn test_round_trip_golden_put(solver: ImpliedVolSolver) {
        let p = price(90.0, 100.0, 0.1, 0.25, 0.35, 0.0, OptionKind::Put);
        let solution = solver
            .try_solve(p, 90.0, 100.0, 0.1, 0.25, OptionKind::Put)
            .unwrap();
        assert!((solution.vol - 0.35).abs() < 1e-4);
        assert_eq!(solution.termination, SolverTermination::Converged);
        assert!(solution.iterations <= 50);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn test_non_positive_price_returns_zero(solver: ImpliedVolSolver, #[case] p: f64) {
        assert_eq!(imply_vol(p, 90.0, 100.0, 0.1, 0.25, OptionKind::Call), 0.0);
        assert_eq!(
            solver.try_solve(p, 90.0, 100.0, 0.1, 0.25, OptionKind::Call),
            Err(ImpliedVolError::NonPositivePrice { price: p })
        );
    }

    #[rstest]
    fn test_otm_call_small_price_passes_floor() {
        // (s - k) * e^(-r * t) is negative, so any positive price clears the floor
        let bound = ImpliedVolSolver::arbitrage_bound(90.0, 100.0, 0.1, 0.25, OptionKind::Call);
        assert!(bound < 0.0);
        assert!(
            ImpliedVolSolver::default()
                .try_solve(0.01, 90.0, 100.0, 0.1, 0.25, OptionKind::Call)
                .is_ok()
        );
    }

    #[rstest]
    fn test_put_below_arbitrage_bound_returns_zero(solver: ImpliedVolSolver) {
        // Floor is 100 * e^(-0.025) - 90 = 7.53
        let bound = ImpliedVolSolver::arbitrage_bound(90.0, 100.0, 0.1, 0.25, OptionKind::Put);
        assert!((bound - (100.0 * (-0.025_f64).exp() - 90.0)).abs() < 1e-12);

        assert_eq!(imply_vol(5.0, 90.0, 100.0, 0.1, 0.25, OptionKind::Put), 0.0);
        assert!(matches!(
            solver.try_solve(5.0, 90.0, 100.0, 0.1, 0.25, OptionKind::Put),
            Err(ImpliedVolError::BelowArbitrageBound { .. })
        ));
    }

    #[rstest]
    fn test_price_equal_to_bound_is_rejected() {
        let bound = ImpliedVolSolver::arbitrage_bound(110.0, 100.0, 0.1, 0.25, OptionKind::Call);
        assert_eq!(
            imply_vol(bound, 110.0, 100.0, 0.1, 0.25, OptionKind::Call),
            0.0
        );
    }

    #[rstest]
    fn test_nan_price_is_rejected() {
        assert_eq!(
            imply_vol(f64::NAN, 90.0, 100.0, 0.1, 0.25, OptionKind::Call),
            0.0
        );
    }

    #[rstest]
    fn test_iteration_cap_case_terminates_with_zero(solver: ImpliedVolSolver) {
        // Deep OTM, short expiry: vega is tiny, the first step overshoots to a huge vol and the
        // second to a negative one where vega is zero
        assert_eq!(imply_vol(1e-8, 100.0, 200.0, 0.0, 0.1, OptionKind::Call), 0.0);

        let err = solver
            .try_solve(1e-8, 100.0, 200.0, 0.0, 0.1, OptionKind::Call)
            .unwrap_err();
        match err {
            ImpliedVolError::NonPositiveVol { vol, iterations } => {
                assert!(vol < 0.0);
                assert!(iterations <= 50);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[rstest]
    fn test_vega_exhausted_at_initial_guess() {
        // d1 is about -44 at the initial guess, so vega underflows to exactly zero
        let solution = ImpliedVolSolver::default()
            .try_solve(0.01, 50.0, 100.0, 0.0, 1.0 / 365.0, OptionKind::Call)
            .unwrap();
        assert_eq!(solution.termination, SolverTermination::VegaExhausted);
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.vol, DEFAULT_INITIAL_VOL);
    }

    #[rstest]
    fn test_iteration_cap_is_respected() {
        let solver = ImpliedVolSolverBuilder::default()
            .max_iterations(1)
            .build()
            .unwrap();
        let p = price(100.0, 100.0, 0.05, 0.5, 1.5, 0.0, OptionKind::Call);
        let solution = solver
            .try_solve(p, 100.0, 100.0, 0.05, 0.5, OptionKind::Call)
            .unwrap();
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.termination, SolverTermination::MaxIterations);
    }

    #[rstest]
    fn test_runaway_vol_without_and_with_ceiling() {
        let (p, s, k, r, t) = (1e-9, 100.0, 200.0, 0.0, 0.05);

        let runaway = imply_vol(p, s, k, r, t, OptionKind::Call);
        assert!(runaway > 1e6);

        let solver = ImpliedVolSolverBuilder::default()
            .max_vol(5.0)
            .build()
            .unwrap();
        assert_eq!(solver.solve(p, s, k, r, t, OptionKind::Call), 0.0);
        assert!(matches!(
            solver.try_solve(p, s, k, r, t, OptionKind::Call),
            Err(ImpliedVolError::AboveMaxVol { max_vol, .. }) if max_vol == 5.0
        ));
    }

    #[rstest]
    fn test_error_display() {
        let err = ImpliedVolError::BelowArbitrageBound {
            price: 5.0,
            bound: 7.5,
        };
        assert_eq!(
            err.to_string(),
            "observed price 5 does not exceed the no-arbitrage bound 7.5"
        );
    }

    #[rstest]
    #[case(90.0, OptionKind::Call)]
    #[case(100.0, OptionKind::Call)]
    #[case(110.0, OptionKind::Put)]
    #[case(95.0, OptionKind::Put)]
    fn test_agrees_with_rational_solver(#[case] s: f64, #[case] kind: OptionKind) {
        let (k, r, t, vol) = (100.0, 0.03, 0.75, 0.27);
        let p = price(s, k, r, t, vol, 0.0, kind);

        let forward = s * (r * t).exp();
        let forward_price = p * (r * t).exp();
        let reference = ImpliedBlackVolatility::builder()
            .option_price(forward_price)
            .forward(forward)
            .strike(k)
            .expiry(t)
            .is_call(kind.is_call())
            .build_unchecked()
            .calculate::<DefaultSpecialFn>()
            .unwrap_or(0.0);

        let newton = imply_vol(p, s, k, r, t, kind);
        assert!(
            (newton - reference).abs() < 1e-5,
            "newton={newton}, reference={reference}"
        );
    }
}
