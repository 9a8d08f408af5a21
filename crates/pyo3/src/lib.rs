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

use bsm_model::{
    data::greeks::BlackScholesGreeks,
    python::data::greeks::{
        py_black_scholes_greeks, py_black_scholes_measure, py_black_scholes_price, py_imply_vol,
    },
};
use pyo3::prelude::*;

#[pymodule]
fn _bsm_pyo3(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<BlackScholesGreeks>()?;
    m.add_function(wrap_pyfunction!(py_black_scholes_price, m)?)?;
    m.add_function(wrap_pyfunction!(py_black_scholes_measure, m)?)?;
    m.add_function(wrap_pyfunction!(py_black_scholes_greeks, m)?)?;
    m.add_function(wrap_pyfunction!(py_imply_vol, m)?)?;
    Ok(())
}
