#[macro_use]
mod macros;

mod grid;
mod transform;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::GridError;
use crate::ops::E;

impl From<GridError> for PyErr {
    fn from(err: GridError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Conformal grid - sampled stages of `F(z) = e * (sqrt(z) + 1) / (sqrt(z) - 1)`
#[pymodule]
pub fn conformal_grid(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("E", E)?;
    transform::register(m)?;
    grid::register(m)?;
    Ok(())
}
