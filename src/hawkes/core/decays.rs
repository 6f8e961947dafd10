//! Decay matrix for exponential Hawkes kernels.
//!
//! `β[[i, j]]` is the decay of the kernel through which events of dimension
//! `j` excite dimension `i`. Decays are fixed during fitting; only the
//! baseline and adjacency are estimated.
use crate::hawkes::errors::{HawkesError, HawkesResult};
use ndarray::{Array2, ArrayView2};

/// Validated square matrix of strictly positive, finite decays.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayMatrix {
    values: Array2<f64>,
}

impl DecayMatrix {
    /// Validate an explicit `D × D` decay matrix.
    ///
    /// Errors
    /// ------
    /// - `HawkesError::NoDimensions` for a 0×0 matrix.
    /// - `HawkesError::DecayShapeMismatch` for a non-square matrix.
    /// - `HawkesError::InvalidDecay` for the first non-finite or non-positive
    ///   entry.
    pub fn new(values: Array2<f64>) -> HawkesResult<Self> {
        let (rows, cols) = values.dim();
        if rows == 0 && cols == 0 {
            return Err(HawkesError::NoDimensions);
        }
        if rows != cols {
            return Err(HawkesError::DecayShapeMismatch { expected: rows, rows, cols });
        }
        for &value in values.iter() {
            validate_decay(value)?;
        }
        Ok(DecayMatrix { values })
    }

    /// `D × D` matrix filled with a single decay.
    pub fn uniform(decay: f64, dims: usize) -> HawkesResult<Self> {
        if dims == 0 {
            return Err(HawkesError::NoDimensions);
        }
        validate_decay(decay)?;
        Ok(DecayMatrix { values: Array2::from_elem((dims, dims), decay) })
    }

    pub fn dims(&self) -> usize {
        self.values.nrows()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Decay of the kernel from dimension `source` into dimension `target`.
    pub fn get(&self, target: usize, source: usize) -> f64 {
        self.values[[target, source]]
    }

    /// Check that the matrix matches a `dims`-dimensional process.
    pub fn ensure_dims(&self, dims: usize) -> HawkesResult<()> {
        if self.dims() != dims {
            let (rows, cols) = self.values.dim();
            return Err(HawkesError::DecayShapeMismatch { expected: dims, rows, cols });
        }
        Ok(())
    }
}

fn validate_decay(value: f64) -> HawkesResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HawkesError::InvalidDecay { value });
    }
    Ok(())
}
