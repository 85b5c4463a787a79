use numpy::{IntoPyArray, PyArray2};
use pyo3::prelude::*;

use crate::sampler::{self, Grid, Pipeline, STAGES};

fn grid_to_py<'py>(py: Python<'py>, grid: &Grid) -> Vec<&'py PyArray2<f64>> {
    grid.to_arrays()
        .into_iter()
        .map(|line| line.into_pyarray(py))
        .collect()
}

#[pyfunction]
#[pyo3(name = "generate_grid")]
pub fn generate_grid_py<'py>(py: Python<'py>) -> Vec<&'py PyArray2<f64>> {
    grid_to_py(py, &sampler::generate_grid())
}

#[pyfunction]
#[pyo3(name = "generate_circle")]
pub fn generate_circle_py<'py>(py: Python<'py>, radius: f64) -> Vec<&'py PyArray2<f64>> {
    grid_to_py(py, &sampler::generate_circle(radius))
}

/// Five snapshots, each a list of `n x 2` arrays.
#[pyfunction]
pub fn run_pipeline<'py>(py: Python<'py>) -> Vec<Vec<&'py PyArray2<f64>>> {
    let pipeline = Pipeline::run();
    pipeline
        .snapshots()
        .iter()
        .map(|grid| grid_to_py(py, grid))
        .collect()
}

/// `(title, formula, (min, max), show_branch_cut)` per stage.
#[pyfunction]
pub fn stages() -> Vec<(&'static str, &'static str, (f64, f64), bool)> {
    STAGES
        .iter()
        .map(|s| (s.title, s.formula, (s.domain.min, s.domain.max), s.show_branch_cut))
        .collect()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_grid_py, m)?)?;
    m.add_function(wrap_pyfunction!(generate_circle_py, m)?)?;
    m.add_function(wrap_pyfunction!(run_pipeline, m)?)?;
    m.add_function(wrap_pyfunction!(stages, m)?)?;
    Ok(())
}
