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

//! Argument handling for the `bsm-measure` binary.

use std::str::FromStr;

use bsm_model::{
    data::{contract::OptionContract, greeks::BlackScholesGreeks},
    enums::OptionKind,
};

/// The contract measured when no arguments are given.
pub const DEFAULT_CONTRACT: OptionContract =
    OptionContract::new(90.0, 100.0, 0.1, 1.0 / 12.0, 0.35, 0.05, OptionKind::Call);

pub const USAGE: &str = "usage: bsm-measure [SPOT STRIKE RATE TIME_TO_EXPIRY VOL DIVIDEND_YIELD KIND]";

/// Parses the positional arguments (program name excluded) into a validated contract.
///
/// # Errors
///
/// Returns an error if the argument count is wrong, a value fails to parse, or the contract
/// fails validation.
pub fn parse_contract<S: AsRef<str>>(args: &[S]) -> anyhow::Result<OptionContract> {
    match args {
        [] => Ok(DEFAULT_CONTRACT),
        [spot, strike, rate, t, vol, y, kind] => {
            let contract = OptionContract::new(
                parse_f64(spot.as_ref(), "spot")?,
                parse_f64(strike.as_ref(), "strike")?,
                parse_f64(rate.as_ref(), "rate")?,
                parse_f64(t.as_ref(), "time_to_expiry")?,
                parse_f64(vol.as_ref(), "vol")?,
                parse_f64(y.as_ref(), "dividend_yield")?,
                OptionKind::from_str(kind.as_ref())
                    .map_err(|_| anyhow::anyhow!("Invalid option kind: '{}'", kind.as_ref()))?,
            );
            contract.validate()?;
            Ok(contract)
        }
        _ => anyhow::bail!("Expected 0 or 7 arguments, was {}\n{USAGE}", args.len()),
    }
}

fn parse_f64(value: &str, param: &str) -> anyhow::Result<f64> {
    value
        .parse::<f64>()
        .map_err(|e| anyhow::anyhow!("Invalid value for '{param}': '{value}' ({e})"))
}

/// Formats `(price, delta, gamma, rho, theta, vega)` space separated.
#[must_use]
pub fn format_measure(greeks: &BlackScholesGreeks) -> String {
    let (price, delta, gamma, rho, theta, vega) = greeks.as_tuple();
    format!("{price} {delta} {gamma} {rho} {theta} {vega}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_no_args_gives_default_contract() {
        let args: [&str; 0] = [];
        assert_eq!(parse_contract(&args).unwrap(), DEFAULT_CONTRACT);
    }

    #[rstest]
    fn test_parse_full_args() {
        let contract = parse_contract(&["90", "100", "0.1", "0.25", "0.35", "0", "put"]).unwrap();
        assert_eq!(
            contract,
            OptionContract::new(90.0, 100.0, 0.1, 0.25, 0.35, 0.0, OptionKind::Put)
        );
    }

    #[rstest]
    #[case(&["90", "100"], "Expected 0 or 7 arguments")]
    #[case(&["90", "100", "0.1", "abc", "0.35", "0", "CALL"], "Invalid value for 'time_to_expiry'")]
    #[case(&["90", "100", "0.1", "0.25", "0.35", "0", "STRADDLE"], "Invalid option kind")]
    #[case(&["-90", "100", "0.1", "0.25", "0.35", "0", "CALL"], "'spot' not positive")]
    fn test_parse_errors(#[case] args: &[&str], #[case] expected: &str) {
        let err = parse_contract(args).unwrap_err();
        assert!(err.to_string().contains(expected), "{err}");
    }

    #[rstest]
    fn test_format_measure_order() {
        let greeks = BlackScholesGreeks {
            price: 1.5,
            vol: 0.2,
            delta: 0.5,
            gamma: 0.25,
            theta: -3.0,
            vega: 12.0,
            rho: 4.0,
        };
        assert_eq!(format_measure(&greeks), "1.5 0.5 0.25 4 -3 12");
    }

    #[rstest]
    fn test_format_default_contract_starts_with_price() {
        let line = format_measure(&DEFAULT_CONTRACT.measure());
        assert!(line.starts_with("0.7906204848"));
        assert_eq!(line.split(' ').count(), 6);
    }
}
