use pyo3::prelude::*;

create_binding!(stage1, crate::ops::stage1);
create_binding!(stage2, crate::ops::stage2);
create_binding!(stage3, crate::ops::stage3);
create_binding!(stage4, crate::ops::stage4);
create_binding!(transform, crate::ops::transform);

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(stage1, m)?)?;
    m.add_function(wrap_pyfunction!(stage2, m)?)?;
    m.add_function(wrap_pyfunction!(stage3, m)?)?;
    m.add_function(wrap_pyfunction!(stage4, m)?)?;
    m.add_function(wrap_pyfunction!(transform, m)?)?;
    Ok(())
}
