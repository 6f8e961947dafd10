//! core — shared Hawkes data, configuration, parameters, and kernel numerics.
//!
//! Purpose
//! -------
//! Collect the building blocks for exponential-kernel Hawkes models: event
//! containers, the buy/sell collision policy, decay matrices, penalties,
//! options, parameters with their θ-space mapping, sufficient statistics,
//! and intensity evaluation. The model layer builds on these primitives.
//!
//! Key behaviors
//! -------------
//! - Validate raw timestamps into [`EventData`] and apply the collision
//!   shift ([`shift_collisions`]) before they enter a model.
//! - Describe fixed kernel decays ([`DecayMatrix`]), adjacency penalties
//!   ([`Penalty`]), and estimation options ([`HawkesOptions`],
//!   [`GoodnessOfFit`], [`Init`]).
//! - Map between model-space [`HawkesParams`] and optimizer-space θ.
//! - Precompute exponential-kernel statistics ([`ExpKernelStats`]) and
//!   evaluate intensities on a grid ([`evaluate_intensity`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Timestamps are finite, non-negative, non-decreasing per dimension, and
//!   the horizon is strictly positive once wrapped in [`EventData`].
//! - Decays are finite and strictly positive; baselines are strictly
//!   positive; adjacency entries are non-negative.
//! - All recursions run in O(N·D²) or better; no routine walks event pairs.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based. `adjacency[[i, j]]` and `decays[[i, j]]` describe
//!   the effect of dimension `j` on dimension `i`.
//! - θ layout is `(θ_μ[0..D), θ_α[0..D·D))`, adjacency row-major.
//! - This module performs no I/O. Error conditions are reported via
//!   [`HawkesResult`](crate::hawkes::errors::HawkesResult).
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests: validation branches for data and
//!   configuration types, brute-force checks for kernel statistics and
//!   intensities, and finite-difference checks for penalty gradients.

pub mod decays;
pub mod dedup;
pub mod events;
pub mod intensity;
pub mod kernel;
pub mod options;
pub mod params;
pub mod penalty;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::decays::DecayMatrix;
pub use self::dedup::{COLLISION_EPSILON, shift_collisions};
pub use self::events::EventData;
pub use self::intensity::{EstimatedIntensity, evaluate_intensity, intensity_grid};
pub use self::kernel::ExpKernelStats;
pub use self::options::{GoodnessOfFit, HawkesOptions, Init};
pub use self::params::HawkesParams;
pub use self::penalty::Penalty;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{
        COLLISION_EPSILON, DecayMatrix, EstimatedIntensity, EventData, GoodnessOfFit,
        HawkesOptions, HawkesParams, Init, Penalty,
    };
}
