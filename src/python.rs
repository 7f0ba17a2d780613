//! PyO3 Python bindings (feature `python`)
//!
//! ```python
//! from alice_thunk import Thunk
//!
//! def tick(thunk, args):
//!     thunk.context["count"] += 1
//!
//! t = Thunk(tick, {"count": 0})
//! t.call()
//! Thunk().call()   # empty: no-op
//! ```
//!
//! Author: Moroya Sakamoto

use std::format;
use std::string::String;

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;

/// Python-side thunk: callable + context object
#[pyclass(name = "Thunk", module = "alice_thunk")]
pub struct PyThunk {
    func: Option<PyObject>,
    context: PyObject,
}

fn checked_callable(py: Python<'_>, func: Option<PyObject>) -> PyResult<Option<PyObject>> {
    if let Some(f) = &func {
        if !f.bind(py).is_callable() {
            log::debug!("python thunk init rejected: func is not callable");
            return Err(PyTypeError::new_err("thunk func must be callable or None"));
        }
    }
    Ok(func)
}

#[pymethods]
impl PyThunk {
    #[new]
    #[pyo3(signature = (func=None, context=None))]
    fn new(py: Python<'_>, func: Option<PyObject>, context: Option<PyObject>) -> PyResult<Self> {
        Ok(Self {
            func: checked_callable(py, func)?,
            context: context.unwrap_or_else(|| py.None()),
        })
    }

    /// Re-arm with a new callable and context; returns self
    #[pyo3(signature = (func=None, context=None))]
    fn init<'py>(
        slf: &Bound<'py, Self>,
        func: Option<PyObject>,
        context: Option<PyObject>,
    ) -> PyResult<Bound<'py, Self>> {
        let py = slf.py();
        let func = checked_callable(py, func)?;
        {
            let mut this = slf.borrow_mut();
            this.func = func;
            this.context = context.unwrap_or_else(|| py.None());
        }
        Ok(slf.clone())
    }

    /// Call `func(self, args)` once; no-op when empty
    #[pyo3(signature = (args=None))]
    fn call(slf: &Bound<'_, Self>, args: Option<PyObject>) -> PyResult<()> {
        let py = slf.py();
        // Release the borrow before running: the callable may touch `context`.
        let func = match &slf.borrow().func {
            Some(func) => func.clone_ref(py),
            None => return Ok(()),
        };
        func.call1(py, (slf.clone().into_any().unbind(), args))?;
        Ok(())
    }

    #[getter]
    fn is_armed(&self) -> bool {
        self.func.is_some()
    }

    #[getter]
    fn context(&self, py: Python<'_>) -> PyObject {
        self.context.clone_ref(py)
    }

    #[setter]
    fn set_context(&mut self, value: PyObject) {
        self.context = value;
    }

    fn __repr__(&self) -> String {
        format!("Thunk(armed={})", self.func.is_some())
    }
}

/// Python module `alice_thunk`
#[pymodule]
fn alice_thunk(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyThunk>()?;
    Ok(())
}
