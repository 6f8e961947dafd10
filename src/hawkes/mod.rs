//! hawkes — multivariate Hawkes processes with exponential kernels.
//!
//! Purpose
//! -------
//! Estimate baselines and excitation (adjacency) of a multivariate Hawkes
//! process whose kernels are `φ_ij(t) = α_ij β_ij e^{−β_ij t}` with fixed
//! decays, and evaluate the fitted conditional intensities.
//!
//! Key behaviors
//! -------------
//! - [`core`] validates event data and configuration, maps parameters to and
//!   from optimizer space, and precomputes kernel statistics.
//! - [`models`] plugs the estimator into the crate's L-BFGS driver
//!   ([`crate::optimization::loglik_optimizer`]).
//! - [`errors`] defines [`HawkesError`] and [`HawkesResult`]. With the
//!   `python-bindings` feature, errors convert into Python `ValueError`s.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fits operate on a single realization observed on `[0, T]`, with `T` the
//!   last event time across dimensions.
//! - Excitation is causal: an event never excites an event at the same
//!   instant.
//!
//! Conventions
//! -----------
//! - Dimension `i` of a bivariate buy/sell model is `0 = buys`, `1 = sells`.
//! - No I/O or logging happens in this module tree apart from the optional
//!   collision warning behind `obs_slog`.
//!
//! Downstream usage
//! ----------------
//! - Use [`models::HawkesExpKern`] directly for full control, or
//!   [`crate::intensity_ratio`] for the buy/sell intensity ratio.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{HawkesError, HawkesResult};
pub use self::models::{HawkesExpKern, HawkesLearner};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::errors::{HawkesError, HawkesResult};
    pub use super::models::{HawkesExpKern, HawkesLearner};
}
