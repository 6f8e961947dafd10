//! Hawkes parameters and their optimizer-space mapping.
//!
//! Purpose
//! -------
//! Hold model-space parameters `(μ, α)` of a D-dimensional Hawkes process and
//! map them to and from the unconstrained vector `θ` the optimizer works on.
//!
//! Key behaviors
//! -------------
//! - [`HawkesParams::new`] validates shapes, a strictly positive baseline,
//!   and a non-negative adjacency.
//! - [`HawkesParams::from_theta`] / [`HawkesParams::to_theta`] convert with
//!   `μ = softplus(θ_μ)`, `α = softplus(θ_α)`.
//! - [`map_theta`] performs the same mapping without domain validation; the
//!   objective uses it so line-search probes far out in θ-space do not abort
//!   a fit.
//!
//! Conventions
//! -----------
//! - Layout: `θ = (θ_μ[0..D), θ_α[0..D·D))` with the adjacency block in
//!   row-major order, so `θ[D + i·D + j]` drives `α_ij`.
//! - `α_ij` is the excitation of dimension `i` by events of dimension `j`.
//! - Zero adjacency entries are floored at [`THETA_FLOOR_VALUE`] before
//!   inversion so `to_theta` stays finite.
use crate::{
    hawkes::errors::{HawkesError, HawkesResult},
    optimization::numerical_stability::transformations::{safe_softplus, safe_softplus_inv},
};
use ndarray::{Array1, Array2, ArrayView1, s};

/// Smallest model-space value inverted by `to_theta`.
pub const THETA_FLOOR_VALUE: f64 = 1e-10;

/// Model-space Hawkes parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HawkesParams {
    /// μ_i > 0
    pub baseline: Array1<f64>,
    /// α_ij ≥ 0, shape D × D
    pub adjacency: Array2<f64>,
}

impl HawkesParams {
    /// Create validated model-space parameters.
    ///
    /// Validates:
    /// - `baseline.len() = D ≥ 1` and `adjacency` is `D × D`
    /// - `baseline` finite and `> 0`
    /// - `adjacency` finite and `≥ 0`
    pub fn new(baseline: Array1<f64>, adjacency: Array2<f64>) -> HawkesResult<Self> {
        let dims = baseline.len();
        if dims == 0 {
            return Err(HawkesError::NoDimensions);
        }
        let (rows, cols) = adjacency.dim();
        if rows != dims || cols != dims {
            return Err(HawkesError::AdjacencyShapeMismatch { dims, rows, cols });
        }
        for (index, &value) in baseline.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(HawkesError::InvalidBaseline { index, value });
            }
        }
        for ((row, col), &value) in adjacency.indexed_iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(HawkesError::InvalidAdjacency { row, col, value });
            }
        }
        Ok(HawkesParams { baseline, adjacency })
    }

    /// Build validated parameters from an optimizer-space vector θ.
    ///
    /// Requirements
    /// ------------
    /// - `theta.len() == dims + dims²` and every entry finite.
    ///
    /// Errors
    /// ------
    /// - `ThetaLengthMismatch` / `InvalidThetaInput` from [`validate_theta`].
    /// - `InvalidBaseline` if a baseline underflows to zero.
    pub fn from_theta(theta: ArrayView1<f64>, dims: usize) -> HawkesResult<Self> {
        validate_theta(theta, dims)?;
        let (baseline, adjacency) = map_theta(theta, dims);
        HawkesParams::new(baseline, adjacency)
    }

    /// Map to optimizer space; inverse of [`HawkesParams::from_theta`].
    pub fn to_theta(&self) -> Array1<f64> {
        let dims = self.dims();
        let mut theta = Array1::zeros(theta_len(dims));
        theta
            .slice_mut(s![..dims])
            .assign(&self.baseline.mapv(|m| safe_softplus_inv(m.max(THETA_FLOOR_VALUE))));
        theta
            .slice_mut(s![dims..])
            .iter_mut()
            .zip(self.adjacency.iter())
            .for_each(|(t, &a)| *t = safe_softplus_inv(a.max(THETA_FLOOR_VALUE)));
        theta
    }

    pub fn dims(&self) -> usize {
        self.baseline.len()
    }

    /// Spectral-radius proxy: largest row sum of the adjacency.
    ///
    /// Values below 1 imply a stationary process (the row-sum norm bounds
    /// the spectral radius of the branching matrix).
    pub fn max_branching_ratio(&self) -> f64 {
        self.adjacency.rows().into_iter().map(|row| row.sum()).fold(0.0, f64::max)
    }
}

/// Number of free parameters for a `dims`-dimensional model.
pub fn theta_len(dims: usize) -> usize {
    dims + dims * dims
}

/// Validate length and finiteness of an optimizer-space vector.
pub fn validate_theta(theta: ArrayView1<f64>, dims: usize) -> HawkesResult<()> {
    let expected = theta_len(dims);
    if theta.len() != expected {
        return Err(HawkesError::ThetaLengthMismatch { expected, actual: theta.len() });
    }
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(HawkesError::InvalidThetaInput { index, value });
        }
    }
    Ok(())
}

/// Unchecked softplus mapping `θ → (μ, α)`; assumes a validated length.
pub fn map_theta(theta: ArrayView1<f64>, dims: usize) -> (Array1<f64>, Array2<f64>) {
    let baseline = theta.slice(s![..dims]).mapv(safe_softplus);
    let adjacency = Array2::from_shape_fn((dims, dims), |(i, j)| {
        safe_softplus(theta[dims + i * dims + j])
    });
    (baseline, adjacency)
}
