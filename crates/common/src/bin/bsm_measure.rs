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

//! Prints `price delta gamma rho theta vega` for an option contract.

use bsm_common::{
    logging::ensure_logging_initialized,
    measure::{format_measure, parse_contract},
};

fn main() -> anyhow::Result<()> {
    ensure_logging_initialized();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let contract = parse_contract(&args)?;
    log::debug!("Measuring {contract}");

    let greeks = contract.measure();
    log::debug!("{greeks}");
    println!("{}", format_measure(&greeks));
    Ok(())
}
