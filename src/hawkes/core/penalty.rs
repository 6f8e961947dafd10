//! Penalties on the Hawkes adjacency matrix.
//!
//! Purpose
//! -------
//! Regularize the excitation weights `α` while leaving the baseline free.
//! The elastic net mixes lasso and ridge terms:
//!
//! `P(α) = s · (r · Σ|α_ij| + (1 − r)/2 · Σ α_ij²)`
//!
//! with strength `s ≥ 0` and ratio `r ∈ [0, 1]`; `L1` and `L2` are the
//! `r = 1` and `r = 0` special cases.
//!
//! Conventions
//! -----------
//! - The adjacency is non-negative by construction (softplus map), so
//!   `|α| = α` and the lasso derivative is the constant `s · r`.
//! - The default is the elastic net with `s = 1e-3` (inverse of `C = 1e3`)
//!   and `r = 0.95`.
use crate::hawkes::errors::{HawkesError, HawkesResult};
use ndarray::{Array2, ArrayView2};

/// Default penalty strength (`1 / C` with `C = 1e3`).
pub const DEFAULT_STRENGTH: f64 = 1e-3;

/// Default elastic-net mixing ratio.
pub const DEFAULT_ELASTIC_NET_RATIO: f64 = 0.95;

/// Penalty applied to the adjacency matrix during fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Penalty {
    None,
    L1 { strength: f64 },
    L2 { strength: f64 },
    ElasticNet { strength: f64, ratio: f64 },
}

impl Penalty {
    pub fn l1(strength: f64) -> HawkesResult<Self> {
        validate_strength(strength)?;
        Ok(Penalty::L1 { strength })
    }

    pub fn l2(strength: f64) -> HawkesResult<Self> {
        validate_strength(strength)?;
        Ok(Penalty::L2 { strength })
    }

    /// Elastic net with validated strength and mixing ratio.
    ///
    /// Errors
    /// ------
    /// - `HawkesError::InvalidPenalty` if `strength` is negative or
    ///   non-finite, or if `ratio` lies outside `[0, 1]`.
    pub fn elastic_net(strength: f64, ratio: f64) -> HawkesResult<Self> {
        validate_strength(strength)?;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(HawkesError::InvalidPenalty {
                value: ratio,
                reason: "elastic-net ratio must lie in [0, 1]",
            });
        }
        Ok(Penalty::ElasticNet { strength, ratio })
    }

    /// `(strength, ratio)` in elastic-net form.
    fn coefficients(&self) -> (f64, f64) {
        match *self {
            Penalty::None => (0.0, 0.0),
            Penalty::L1 { strength } => (strength, 1.0),
            Penalty::L2 { strength } => (strength, 0.0),
            Penalty::ElasticNet { strength, ratio } => (strength, ratio),
        }
    }

    /// Penalty value `P(α)`.
    pub fn value(&self, adjacency: ArrayView2<f64>) -> f64 {
        let (s, r) = self.coefficients();
        if s == 0.0 {
            return 0.0;
        }
        let (l1, l2) = adjacency.iter().fold((0.0, 0.0), |(l1, l2), &a| (l1 + a.abs(), l2 + a * a));
        s * (r * l1 + 0.5 * (1.0 - r) * l2)
    }

    /// Elementwise derivative `∂P/∂α_ij` for a non-negative adjacency.
    pub fn gradient(&self, adjacency: ArrayView2<f64>) -> Array2<f64> {
        let (s, r) = self.coefficients();
        adjacency.mapv(|a| s * (r * a.signum() + (1.0 - r) * a))
    }
}

impl Default for Penalty {
    fn default() -> Self {
        Penalty::ElasticNet { strength: DEFAULT_STRENGTH, ratio: DEFAULT_ELASTIC_NET_RATIO }
    }
}

fn validate_strength(strength: f64) -> HawkesResult<()> {
    if !strength.is_finite() || strength < 0.0 {
        return Err(HawkesError::InvalidPenalty {
            value: strength,
            reason: "penalty strength must be finite and >= 0",
        });
    }
    Ok(())
}
