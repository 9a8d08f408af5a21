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

//! Pricing data types and the model kernels.

pub mod black_scholes;
pub mod contract;
pub mod greeks;
pub mod implied_vol;

pub use black_scholes::{measure, price_and_vega};
pub use contract::OptionContract;
pub use greeks::{BlackScholesGreeks, black_scholes_greeks};
pub use implied_vol::{ImpliedVolError, ImpliedVolSolution, ImpliedVolSolver, imply_vol};
