//! numerical_stability — numerically robust parameter transforms.
//!
//! Purpose
//! -------
//! Collect the numerically stable scalar transforms that map unconstrained
//! optimizer coordinates onto positive model parameters, plus their
//! derivatives. Centralizing them here lets the Hawkes layer assume
//! well-conditioned `f64` arithmetic in every objective evaluation.
//!
//! Key behaviors
//! -------------
//! - Provide stable scalar transforms (`safe_softplus`, its inverse, and
//!   `safe_logistic`) for mapping unconstrained reals into strictly
//!   positive or (0, 1) values without overflow/underflow.
//!
//! Invariants & assumptions
//! ------------------------
//! - All public transforms assume finite `f64` inputs; θ finiteness and
//!   length checks live in the model layer, not here.
//! - `safe_softplus_inv` expects a strictly positive argument.
//!
//! Conventions
//! -----------
//! - Hawkes θ-space layout is `θ = (θ_μ[0..D), θ_α[0..D·D))` with
//!   `μ = softplus(θ_μ)` and `α = softplus(θ_α)`; the chain rule multiplies
//!   model-space gradients by `safe_logistic(θ)` coordinate-wise.
//! - This module never logs, performs I/O, or touches global state.
//!
//! Downstream usage
//! ----------------
//! - `hawkes::core::params` maps θ ↔ `(baseline, adjacency)` with these
//!   helpers; the exponential-kernel objective uses `safe_logistic` for its
//!   analytic gradient.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with naïve formulas
//!   on safe grids, tail behavior, and the softplus/logistic derivative link.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{safe_logistic, safe_softplus, safe_softplus_inv};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use hawkes_intensity::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{safe_logistic, safe_softplus, safe_softplus_inv};
}
