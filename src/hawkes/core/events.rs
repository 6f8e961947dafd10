//! Event data containers for multivariate Hawkes models.
//!
//! Purpose
//! -------
//! Provide a small, validated container for a multivariate point-process
//! realization: one timestamp sequence per dimension plus the observation
//! horizon. This module centralizes input validation so kernel statistics,
//! objectives, and intensity evaluation can assume clean, ordered data.
//!
//! Key behaviors
//! -------------
//! - [`EventData`] enforces non-empty dimensions and finite, non-negative,
//!   non-decreasing timestamps.
//! - The horizon `end_time` is the largest last timestamp across dimensions
//!   and must be strictly positive.
//!
//! Invariants & assumptions
//! ------------------------
//! - At least one dimension is present and every dimension holds ≥ 1 event.
//! - Within a dimension, `t[k] <= t[k + 1]` (ties are allowed).
//! - `end_time > 0` and every timestamp lies in `[0, end_time]`.
//!
//! Conventions
//! -----------
//! - Dimension `d` is the index into `realizations`; in the intensity-ratio
//!   pipeline dimension 0 holds buys and dimension 1 holds sells.
//! - The observation window is `[0, end_time]`.
//!
//! Downstream usage
//! ----------------
//! - Construct [`EventData`] where raw timestamps enter the Hawkes stack;
//!   downstream code relies on its invariants and does not re-validate.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, each rejection branch, and the
//!   horizon computation across dimensions.
use crate::hawkes::errors::{HawkesError, HawkesResult};
use ndarray::{Array1, ArrayView1};

/// `EventData` — validated multivariate event timestamps plus horizon.
///
/// Fields
/// ------
/// - `realizations`: `Vec<Array1<f64>>`
///   One non-decreasing timestamp sequence per dimension.
/// - `end_time`: `f64`
///   Observation horizon `T = max_d last(realizations[d])`.
///
/// Performance
/// -----------
/// - Validation is a single O(N) scan over all timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct EventData {
    realizations: Vec<Array1<f64>>,
    end_time: f64,
}

impl EventData {
    /// Construct a validated [`EventData`] from per-dimension timestamps.
    ///
    /// Errors
    /// ------
    /// - `HawkesError::NoDimensions` when `realizations` is empty.
    /// - `HawkesError::EmptySeries { dim }` for the first empty dimension.
    /// - `HawkesError::NonFiniteTimestamp` / `NegativeTimestamp` /
    ///   `UnsortedTimestamps` for the first offending timestamp.
    /// - `HawkesError::ZeroHorizon` when every timestamp is zero.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use hawkes_intensity::hawkes::core::events::EventData;
    /// let events = EventData::new(vec![array![1.0, 2.0], array![1.5, 3.0]]).unwrap();
    /// assert_eq!(events.n_dims(), 2);
    /// assert_eq!(events.end_time(), 3.0);
    /// ```
    pub fn new(realizations: Vec<Array1<f64>>) -> HawkesResult<Self> {
        if realizations.is_empty() {
            return Err(HawkesError::NoDimensions);
        }

        let mut end_time = 0.0_f64;
        for (dim, series) in realizations.iter().enumerate() {
            validate_series(dim, series.view())?;
            if let Some(&last) = series.last() {
                end_time = end_time.max(last);
            }
        }

        if end_time <= 0.0 {
            return Err(HawkesError::ZeroHorizon);
        }

        Ok(EventData { realizations, end_time })
    }

    /// Copy borrowed slices into a validated [`EventData`].
    pub fn from_slices(series: &[&[f64]]) -> HawkesResult<Self> {
        EventData::new(series.iter().map(|s| Array1::from(s.to_vec())).collect())
    }

    /// Number of dimensions `D`.
    pub fn n_dims(&self) -> usize {
        self.realizations.len()
    }

    /// Observation horizon `T`.
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Timestamps of dimension `dim`.
    ///
    /// Panics if `dim >= n_dims()`.
    pub fn realization(&self, dim: usize) -> ArrayView1<'_, f64> {
        self.realizations[dim].view()
    }

    pub fn realizations(&self) -> &[Array1<f64>] {
        &self.realizations
    }

    /// Event count per dimension.
    pub fn counts(&self) -> Array1<f64> {
        self.realizations.iter().map(|r| r.len() as f64).collect()
    }

    /// Total number of events `N` across all dimensions.
    pub fn total_events(&self) -> usize {
        self.realizations.iter().map(|r| r.len()).sum()
    }
}

fn validate_series(dim: usize, series: ArrayView1<f64>) -> HawkesResult<()> {
    if series.is_empty() {
        return Err(HawkesError::EmptySeries { dim });
    }
    let mut previous = f64::NEG_INFINITY;
    for (index, &value) in series.iter().enumerate() {
        if !value.is_finite() {
            return Err(HawkesError::NonFiniteTimestamp { dim, index, value });
        }
        if value < 0.0 {
            return Err(HawkesError::NegativeTimestamp { dim, index, value });
        }
        if value < previous {
            return Err(HawkesError::UnsortedTimestamps { dim, index, previous, value });
        }
        previous = value;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `EventData::new` and `from_slices`.
    // - Enforcement of invariants:
    //   * at least one dimension, each non-empty,
    //   * finite, non-negative, non-decreasing timestamps,
    //   * strictly positive horizon.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Valid bivariate input is accepted and summarized correctly.
    //
    // Given
    // -----
    // - Buys `[1, 2, 3]` and sells `[1.5, 2.5]`.
    //
    // Expect
    // ------
    // - Two dimensions, `end_time = 3`, counts `[3, 2]`, total 5.
    fn new_accepts_valid_bivariate_input() {
        let events = EventData::new(vec![array![1.0, 2.0, 3.0], array![1.5, 2.5]]).unwrap();

        assert_eq!(events.n_dims(), 2);
        assert_eq!(events.end_time(), 3.0);
        assert_eq!(events.counts(), array![3.0, 2.0]);
        assert_eq!(events.total_events(), 5);
        assert_eq!(events.realization(1), array![1.5, 2.5].view());
    }

    #[test]
    // Purpose
    // -------
    // The horizon is the largest last timestamp, whichever dimension holds it.
    //
    // Given
    // -----
    // - Dimension 1 ends later than dimension 0; ties inside dimension 0.
    //
    // Expect
    // ------
    // - `end_time` equals dimension 1's last timestamp.
    fn end_time_uses_latest_dimension_and_allows_ties() {
        let events = EventData::from_slices(&[&[0.0, 1.0, 1.0], &[4.25]]).unwrap();

        assert_eq!(events.end_time(), 4.25);
    }

    #[test]
    // Purpose
    // -------
    // Degenerate shapes are rejected with dimension-specific errors.
    //
    // Given
    // -----
    // - No dimensions, and a second dimension with no events.
    //
    // Expect
    // ------
    // - `NoDimensions` and `EmptySeries { dim: 1 }`.
    fn new_rejects_missing_or_empty_dimensions() {
        assert_eq!(EventData::new(vec![]).unwrap_err(), HawkesError::NoDimensions);
        assert_eq!(
            EventData::from_slices(&[&[1.0], &[]]).unwrap_err(),
            HawkesError::EmptySeries { dim: 1 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Bad timestamps report the first offending dimension, index, and value.
    //
    // Given
    // -----
    // - A NaN, a negative value, and a decreasing pair.
    //
    // Expect
    // ------
    // - The matching validation variant for each case.
    fn new_rejects_invalid_timestamps() {
        let err = EventData::from_slices(&[&[1.0, f64::INFINITY]]).unwrap_err();
        assert_eq!(
            err,
            HawkesError::NonFiniteTimestamp { dim: 0, index: 1, value: f64::INFINITY }
        );

        let err = EventData::from_slices(&[&[1.0], &[-0.5, 1.0]]).unwrap_err();
        assert_eq!(err, HawkesError::NegativeTimestamp { dim: 1, index: 0, value: -0.5 });

        let err = EventData::from_slices(&[&[1.0, 3.0, 2.0]]).unwrap_err();
        assert_eq!(
            err,
            HawkesError::UnsortedTimestamps { dim: 0, index: 2, previous: 3.0, value: 2.0 }
        );
    }

    #[test]
    // Purpose
    // -------
    // A realization sitting entirely at t = 0 has no observation window.
    //
    // Given
    // -----
    // - Both dimensions with a single event at 0.
    //
    // Expect
    // ------
    // - `ZeroHorizon`.
    fn new_rejects_zero_horizon() {
        let err = EventData::from_slices(&[&[0.0], &[0.0]]).unwrap_err();

        assert_eq!(err, HawkesError::ZeroHorizon);
    }
}
