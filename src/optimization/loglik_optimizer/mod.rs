//! loglik_optimizer — L-BFGS maximization of smooth objectives via argmin.
//!
//! Purpose
//! -------
//! Fit models by maximizing an objective `ℓ(θ)` over an unconstrained
//! vector. For the Hawkes estimators `ℓ` is either the normalized
//! log-likelihood or the negated least-squares contrast, minus the
//! adjacency penalty.
//!
//! Key behaviors
//! -------------
//! - Models implement [`LogLikelihood`] (`value`, `check`, optional `grad`).
//! - [`maximize`] checks the start, wraps the model in
//!   [`adapter::ArgMinAdapter`] (cost `c(θ) = −ℓ(θ)`), builds the solver
//!   named by [`LineSearcher`] through [`builders`], and runs it with
//!   [`run::run_solver`].
//! - A model without an analytic gradient gets central (then forward)
//!   finite differences from [`adapter`]; every gradient is checked by
//!   [`validation`] before argmin sees it.
//!
//! Invariants & assumptions
//! ------------------------
//! - User code returns `ℓ` and `∇ℓ`, never the cost; sign flips happen only
//!   in the adapter.
//! - Objective failures are `OptError` values, never panics. They travel
//!   through argmin boxed and are unboxed back into the original variant.
//!
//! Conventions
//! -----------
//! - [`OptimOutcome::value`] is reported in objective space.
//! - Constrained parameters are mapped to θ by the model layer
//!   ([`crate::hawkes::core::params`]).

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use hawkes_intensity::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
