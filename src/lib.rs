//! hawkes_intensity — exponential-kernel Hawkes fits and buy/sell intensity
//! ratios, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the intensity-ratio estimator to Python via the
//! `_hawkes_intensity` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: [`hawkes`] (data, kernels, models),
//!   [`intensity_ratio`] (the buy/sell pipeline), [`optimization`] (the
//!   L-BFGS driver), and [`utils`].
//! - With `python-bindings`, define the `#[pymodule]` initializer and the
//!   Python-facing functions `get_intensity_ratio` and `return_input`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, input extraction, and error mapping.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code stay typed ([`hawkes::HawkesError`],
//!   [`optimization::errors::OptError`]) and become Python `ValueError`s at
//!   the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Rust callers use [`intensity_ratio::get_intensity_ratio`] or
//!   [`hawkes::HawkesExpKern`] directly and can ignore the PyO3 items.
//! - The Python packaging layer imports `_hawkes_intensity`.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_intensity_ratio.rs`.

pub mod hawkes;
pub mod intensity_ratio;
pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    intensity_ratio::IntensityRatioEstimator,
    utils::{build_hawkes_options, extract_timestamps},
};

/// get_intensity_ratio — fitted buy intensity over fitted sell intensity.
///
/// Parameters
/// ----------
/// - `decay`: `float`
///   Exponential-kernel decay shared by all four kernels; finite and > 0.
/// - `buys`, `sells`: array-like of `float`
///   Non-empty, non-decreasing, non-negative timestamps.
/// - `gof`: `str | None`
///   `"least-squares"` (default) or `"likelihood"`.
/// - `penalty_strength`, `elastic_net_ratio`: `float | None`
///   Elastic-net settings; default `1e-3` and `0.95`.
/// - `tol_grad`, `max_iter`, `line_searcher`, `lbfgs_mem`
///   Optimizer settings; defaults `1e-6`, `300`, `"MoreThuente"`, `7`.
///
/// Returns
/// -------
/// - `float`: ratio of the final buy intensity to the final sell intensity.
///
/// Raises
/// ------
/// - `ValueError` for invalid inputs, failed fits, or an undefined ratio.
/// - `TypeError` when `buys` or `sells` cannot be read as float arrays.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "get_intensity_ratio")]
#[pyo3(
    signature = (
        decay,
        buys,
        sells,
        gof = None,
        penalty_strength = None,
        elastic_net_ratio = None,
        tol_grad = None,
        max_iter = None,
        line_searcher = None,
        lbfgs_mem = None,
    )
)]
#[allow(clippy::too_many_arguments)]
fn py_get_intensity_ratio<'py>(
    py: Python<'py>, decay: f64, buys: &Bound<'py, PyAny>, sells: &Bound<'py, PyAny>,
    gof: Option<&str>, penalty_strength: Option<f64>, elastic_net_ratio: Option<f64>,
    tol_grad: Option<f64>, max_iter: Option<usize>, line_searcher: Option<&str>,
    lbfgs_mem: Option<usize>,
) -> PyResult<f64> {
    let buys = extract_timestamps(py, buys, "buys")?;
    let sells = extract_timestamps(py, sells, "sells")?;
    let options = build_hawkes_options(
        gof,
        penalty_strength,
        elastic_net_ratio,
        tol_grad,
        max_iter,
        line_searcher,
        lbfgs_mem,
    )?;
    let estimator = IntensityRatioEstimator::with_options(decay, options)?;
    Ok(estimator.estimate(&buys, &sells)?)
}

/// return_input — hand back the argument unchanged.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "return_input")]
fn py_return_input<'py>(input: Bound<'py, PyAny>) -> Bound<'py, PyAny> {
    utils::return_input(input)
}

/// _hawkes_intensity — PyO3 module initializer.
///
/// Registers `get_intensity_ratio` and `return_input` on the extension
/// module. Invoked by Python on import.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _hawkes_intensity<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_get_intensity_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(py_return_input, m)?)?;
    Ok(())
}
