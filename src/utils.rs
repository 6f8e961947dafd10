//! Small shared helpers: the identity passthrough and, behind
//! `python-bindings`, conversions from Python inputs into crate types.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    hawkes::core::{
        options::{GoodnessOfFit, HawkesOptions, Init},
        penalty::{DEFAULT_ELASTIC_NET_RATIO, DEFAULT_STRENGTH, Penalty},
    },
    optimization::{
        errors::OptError,
        loglik_optimizer::{LineSearcher, MLEOptions, Tolerances},
    },
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Return `input` unchanged.
///
/// Exported to Python as a smoke test for the extension module.
pub fn return_input<T>(input: T) -> T {
    input
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Timestamps from a numpy array, pandas Series, or float sequence.
///
/// `name` is only used in the error message.
#[cfg(feature = "python-bindings")]
pub fn extract_timestamps<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Vec<f64>> {
    let arr = extract_f64_array(py, raw)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(slice.to_vec())
}

/// Assemble [`HawkesOptions`] from optional Python keyword arguments.
///
/// Unset values fall back to the Rust defaults: least squares, elastic net
/// with strength `1e-3` and ratio `0.95`, `tol_grad = 1e-6`,
/// `max_iter = 300`, More–Thuente line search.
#[cfg(feature = "python-bindings")]
pub fn build_hawkes_options(
    gof: Option<&str>, penalty_strength: Option<f64>, elastic_net_ratio: Option<f64>,
    tol_grad: Option<f64>, max_iter: Option<usize>, line_searcher: Option<&str>,
    lbfgs_mem: Option<usize>,
) -> PyResult<HawkesOptions> {
    use std::str::FromStr;

    let gof = match gof {
        Some(name) => GoodnessOfFit::from_str(name)?,
        None => GoodnessOfFit::LeastSquares,
    };
    let penalty = Penalty::elastic_net(
        penalty_strength.unwrap_or(DEFAULT_STRENGTH),
        elastic_net_ratio.unwrap_or(DEFAULT_ELASTIC_NET_RATIO),
    )?;
    let mle_opts = extract_mle_opts(tol_grad, max_iter, line_searcher, lbfgs_mem)?;

    Ok(HawkesOptions::new(gof, penalty, Init::Default, mle_opts))
}

#[cfg(feature = "python-bindings")]
fn extract_mle_opts(
    tol_grad: Option<f64>, max_iter: Option<usize>, line_searcher: Option<&str>,
    lbfgs_mem: Option<usize>,
) -> PyResult<MLEOptions> {
    use std::str::FromStr;

    let defaults = MLEOptions::default();
    let tols = Tolerances::new(
        tol_grad.or(defaults.tols.tol_grad),
        None,
        max_iter.or(defaults.tols.max_iter),
    )
    .map_err(opt_err_to_py)?;

    let ls = match line_searcher {
        Some(name) => LineSearcher::from_str(name).map_err(opt_err_to_py)?,
        None => defaults.line_searcher,
    };

    MLEOptions::new(tols, ls, false, lbfgs_mem).map_err(opt_err_to_py)
}

#[cfg(feature = "python-bindings")]
fn opt_err_to_py(err: OptError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // `return_input` hands back exactly what it receives.
    //
    // Given
    // -----
    // - A float, an owned string, and a vector.
    //
    // Expect
    // ------
    // - Each value unchanged.
    fn return_input_is_identity() {
        assert_eq!(return_input(1.25), 1.25);
        assert_eq!(return_input(String::from("buy")), "buy");
        assert_eq!(return_input(vec![1.0, 2.0]), vec![1.0, 2.0]);
    }
}
