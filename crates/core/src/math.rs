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

//! Standard normal distribution primitives.

use std::f64::consts::SQRT_2;

/// The constant `1 / sqrt(2 * pi)`.
pub const FRAC_1_SQRT_2_PI: f64 = f64::from_bits(0x3fd9884533d43651);

/// Returns the standard normal cumulative distribution function `N(x)`.
///
/// Evaluated as `0.5 * (1 + erf(x / sqrt(2)))`, which saturates to exactly `0.0` and `1.0`
/// in the far tails.
#[inline(always)]
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

/// Returns the standard normal probability density function `N'(x)`.
#[inline(always)]
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2_PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_frac_1_sqrt_2_pi() {
        let expected = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        assert!((FRAC_1_SQRT_2_PI - expected).abs() < 1e-16);
    }

    #[rstest]
    fn test_norm_cdf_at_zero_is_exactly_half() {
        assert_eq!(norm_cdf(0.0), 0.5);
    }

    #[rstest]
    #[case(1.0, 0.841_344_746_068_542_9)]
    #[case(-1.0, 0.158_655_253_931_457_07)]
    #[case(1.96, 0.975_002_104_851_779_6)]
    #[case(-2.5, 0.006_209_665_325_776_159)]
    fn test_norm_cdf_known_values(#[case] x: f64, #[case] expected: f64) {
        assert!(
            (norm_cdf(x) - expected).abs() < 1e-14,
            "N({x}) = {}, expected {expected}",
            norm_cdf(x)
        );
    }

    #[rstest]
    #[case(0.3)]
    #[case(1.7)]
    #[case(4.2)]
    fn test_norm_cdf_symmetry(#[case] x: f64) {
        assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-15);
    }

    #[rstest]
    fn test_norm_cdf_saturates_in_tails() {
        assert_eq!(norm_cdf(-40.0), 0.0);
        assert_eq!(norm_cdf(40.0), 1.0);
    }

    #[rstest]
    fn test_norm_pdf_at_zero() {
        assert_eq!(norm_pdf(0.0), FRAC_1_SQRT_2_PI);
    }

    #[rstest]
    fn test_norm_pdf_is_even() {
        assert_eq!(norm_pdf(1.25), norm_pdf(-1.25));
    }

    #[rstest]
    fn test_norm_pdf_known_value() {
        assert!((norm_pdf(1.0) - 0.241_970_724_519_143_37).abs() < 1e-15);
    }

    #[rstest]
    fn test_norm_pdf_underflows_to_zero() {
        assert_eq!(norm_pdf(40.0), 0.0);
    }
}
