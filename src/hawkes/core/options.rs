//! Hawkes options — configuration for exponential-kernel estimation.
//!
//! Purpose
//! -------
//! Collect the configuration knobs of a Hawkes fit in one place: which
//! goodness-of-fit criterion is optimized, how the adjacency is penalized,
//! where the optimizer starts, and the optimizer settings themselves.
//!
//! Key behaviors
//! -------------
//! - [`GoodnessOfFit`] selects least squares (default) or log-likelihood and
//!   parses case-insensitively from strings for the Python surface.
//! - [`Init`] is either the data-driven default or an explicit, validated
//!   `(baseline, adjacency)` pair.
//! - [`HawkesOptions`] bundles the above with a [`Penalty`] and
//!   [`MLEOptions`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Components are validated by their own constructors (`Penalty::*`,
//!   `Init::fixed`, `Tolerances::new`); [`HawkesOptions::new`] adds no
//!   cross-field checks.
//!
//! Conventions
//! -----------
//! - Default initial guess: `μ_i = 0.5 · n_i / T` and `α_ij = 0.1`.
//! - This module provides plain data carriers and never panics.
//!
//! Testing notes
//! -------------
//! - Unit tests cover string parsing, default values, and the data-driven
//!   initial guess.
use crate::{
    hawkes::{
        core::{events::EventData, params::HawkesParams, penalty::Penalty},
        errors::{HawkesError, HawkesResult},
    },
    optimization::loglik_optimizer::MLEOptions,
};
use ndarray::{Array1, Array2};
use std::str::FromStr;

/// Fraction of the empirical rate used as the default baseline guess.
const DEFAULT_BASELINE_FRACTION: f64 = 0.5;

/// Default starting value of every adjacency entry.
const DEFAULT_ADJACENCY_GUESS: f64 = 0.1;

/// Criterion minimized (least squares) or maximized (likelihood) by the fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoodnessOfFit {
    /// `R = (1/N) Σ_i [∫ λ_i² − 2 Σ_k λ_i(t_k^i)]`.
    #[default]
    LeastSquares,
    /// `ℓ/N = (1/N) Σ_i [Σ_k log λ_i(t_k^i) − ∫ λ_i]`.
    LogLikelihood,
}

impl FromStr for GoodnessOfFit {
    type Err = HawkesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "least-squares" | "least_squares" | "leastsquares" => Ok(GoodnessOfFit::LeastSquares),
            "likelihood" | "log-likelihood" | "loglikelihood" => Ok(GoodnessOfFit::LogLikelihood),
            _ => Err(HawkesError::InvalidGoodnessOfFit { name: s.to_string() }),
        }
    }
}

/// Initial guess for the optimizer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Init {
    /// Half the empirical event rate for μ and 0.1 for every α.
    #[default]
    Default,
    /// Explicit model-space starting point.
    Fixed(HawkesParams),
}

impl Init {
    /// Explicit starting point; validated like any [`HawkesParams`].
    pub fn fixed(baseline: Array1<f64>, adjacency: Array2<f64>) -> HawkesResult<Self> {
        Ok(Init::Fixed(HawkesParams::new(baseline, adjacency)?))
    }

    /// Resolve the policy into model-space parameters for `events`.
    ///
    /// Errors
    /// ------
    /// - `HawkesError::InvalidInit` when a fixed guess has the wrong
    ///   dimension.
    pub fn resolve(&self, events: &EventData) -> HawkesResult<HawkesParams> {
        let dims = events.n_dims();
        match self {
            Init::Default => {
                let baseline =
                    events.counts().mapv(|n| DEFAULT_BASELINE_FRACTION * n / events.end_time());
                let adjacency = Array2::from_elem((dims, dims), DEFAULT_ADJACENCY_GUESS);
                HawkesParams::new(baseline, adjacency)
            }
            Init::Fixed(params) => {
                if params.dims() != dims {
                    return Err(HawkesError::InvalidInit {
                        reason: "fixed guess dimension differs from the event data",
                    });
                }
                Ok(params.clone())
            }
        }
    }
}

/// Estimation options for [`HawkesExpKern`](crate::hawkes::models::exp_kern::HawkesExpKern).
///
/// Default
/// -------
/// - `gof`: least squares
/// - `penalty`: elastic net, strength `1e-3`, ratio `0.95`
/// - `init`: [`Init::Default`]
/// - `mle_opts`: [`MLEOptions::default`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HawkesOptions {
    pub gof: GoodnessOfFit,
    pub penalty: Penalty,
    pub init: Init,
    pub mle_opts: MLEOptions,
}

impl HawkesOptions {
    pub fn new(gof: GoodnessOfFit, penalty: Penalty, init: Init, mle_opts: MLEOptions) -> Self {
        HawkesOptions { gof, penalty, init, mle_opts }
    }
}
