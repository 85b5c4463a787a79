// src/bindings/macros.rs

/// Pointwise stage binding: `n x 2` array of `(re, im)` in, same shape out.
///
/// `create_binding!(python_name, rust_fn);`
macro_rules! create_binding {
    ($py_fn_name:ident, $rust_fn:path) => {
        #[pyo3::prelude::pyfunction]
        pub fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            points: numpy::PyReadonlyArray2<f64>,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray2<f64>> {
            let line = $crate::sampler::Polyline::from_array(&points.as_array())?;
            let mapped = line.map($rust_fn);
            Ok(numpy::IntoPyArray::into_pyarray(mapped.to_array(), py))
        }
    };
}
