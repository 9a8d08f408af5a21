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

//! Enumerations for the option pricing domain.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The type of a European vanilla option.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionKind {
    /// A call option (pays `max(S - K, 0)` at expiry).
    Call = 1,
    /// A put option (pays `max(K - S, 0)` at expiry).
    Put = 2,
}

impl OptionKind {
    /// Returns the payoff sign `phi`: `+1.0` for a call and `-1.0` for a put.
    #[inline(always)]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }

    /// Returns the option kind for a call flag.
    #[must_use]
    pub const fn from_is_call(is_call: bool) -> Self {
        if is_call { Self::Call } else { Self::Put }
    }

    #[must_use]
    pub const fn is_call(self) -> bool {
        matches!(self, Self::Call)
    }
}

/// The unit convention in which Greeks are reported.
///
/// `Raw` values are the analytic partial derivatives (per unit spot, per year, per unit of
/// volatility). `Market` values are rescaled for reporting: delta per 1% spot move, gamma per
/// (1% spot move)^2, theta per trading day (240 per year) and vega per volatility point.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GreeksConvention {
    #[default]
    Raw = 1,
    Market = 2,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(OptionKind::Call, 1.0)]
    #[case(OptionKind::Put, -1.0)]
    fn test_option_kind_sign(#[case] kind: OptionKind, #[case] expected: f64) {
        assert_eq!(kind.sign(), expected);
    }

    #[rstest]
    fn test_option_kind_from_is_call() {
        assert_eq!(OptionKind::from_is_call(true), OptionKind::Call);
        assert_eq!(OptionKind::from_is_call(false), OptionKind::Put);
        assert!(OptionKind::Call.is_call());
        assert!(!OptionKind::Put.is_call());
    }

    #[rstest]
    #[case("CALL", OptionKind::Call)]
    #[case("call", OptionKind::Call)]
    #[case("Put", OptionKind::Put)]
    fn test_option_kind_from_str(#[case] input: &str, #[case] expected: OptionKind) {
        assert_eq!(OptionKind::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_option_kind_display() {
        assert_eq!(OptionKind::Call.to_string(), "CALL");
        assert_eq!(OptionKind::Put.as_ref(), "PUT");
    }

    #[rstest]
    fn test_option_kind_serde() {
        let json = serde_json::to_string(&OptionKind::Put).unwrap();
        assert_eq!(json, "\"PUT\"");
        let kind: OptionKind = serde_json::from_str("\"CALL\"").unwrap();
        assert_eq!(kind, OptionKind::Call);
    }

    #[rstest]
    fn test_option_kind_iter() {
        let kinds: Vec<OptionKind> = OptionKind::iter().collect();
        assert_eq!(kinds, vec![OptionKind::Call, OptionKind::Put]);
    }

    #[rstest]
    fn test_greeks_convention_default_is_raw() {
        assert_eq!(GreeksConvention::default(), GreeksConvention::Raw);
    }

    #[rstest]
    fn test_greeks_convention_from_str() {
        assert_eq!(
            GreeksConvention::from_str("market").unwrap(),
            GreeksConvention::Market
        );
        assert!(GreeksConvention::from_str("per_day").is_err());
    }
}
