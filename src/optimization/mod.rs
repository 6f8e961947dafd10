//! optimization — objective maximizer, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting, combining an
//! Argmin-backed L-BFGS maximizer, numerically stable parameter transforms,
//! and a single error/result surface. Callers implement an objective,
//! choose tolerances, and obtain fitted parameters and diagnostics without
//! touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing objectives** `ℓ(θ)`
//!   (`loglik_optimizer`), including configuration of solvers and stopping
//!   criteria and a finite-difference fallback when no analytic gradient
//!   is supplied.
//! - Supply shared numerical primitives (`numerical_stability`) for mapping
//!   unconstrained parameters into model space.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate in an unconstrained parameter space `θ` and assume
//!   that inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Objective implementations treat domain violations (e.g. a
//!   non-positive intensity at an event) as recoverable errors surfaced
//!   through the optimization layer.
//!
//! Conventions
//! -----------
//! - All solvers conceptually maximize `ℓ(θ)` by minimizing an internal
//!   cost `c(θ) = -ℓ(θ)`; user-facing APIs and outcomes are expressed in
//!   terms of `ℓ`.
//! - Parameters and gradients are represented using `ndarray`-based
//!   aliases (`Theta`, `Grad`); mapping between θ-space and structured
//!   model parameters is handled by the model layer with the
//!   numerical-stability helpers.
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw Argmin errors.
//! - This module avoids I/O; solver progress is only reported through the
//!   optional `obs_slog` observer when `MLEOptions::verbose` is set.
//!
//! Downstream usage
//! ----------------
//! - Model code implements `LogLikelihood` for its types and calls
//!   `maximize` with a parameter guess, data payload, and `MLEOptions` to
//!   obtain an `OptimOutcome` (via `loglik_optimizer`).
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns:
//!   - `loglik_optimizer`: solver wiring, tolerance handling, and
//!     convergence on toy objectives.
//!   - `numerical_stability`: agreement with naïve formulas on safe grids
//!     and well-behaved tails.
//!   - `errors`: conversions from backend/model errors into `OptError`.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use hawkes_intensity::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
