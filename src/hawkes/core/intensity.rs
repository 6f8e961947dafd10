//! Conditional intensity on a uniform time grid.
//!
//! Purpose
//! -------
//! Evaluate `λ_i(t) = μ_i + Σ_j α_ij β_ij Σ_{t_l^j ≤ t} e^{−β_ij (t − t_l^j)}`
//! for fitted parameters on a grid covering the observation window.
//!
//! Key behaviors
//! -------------
//! - [`intensity_grid`] returns `0, step, 2·step, …` while below the
//!   horizon, then the horizon itself, so the last grid point is always
//!   `end_time`.
//! - [`evaluate_intensity`] walks the grid and the events together with the
//!   exponential recursion in O((grid + N) · D²).
//!
//! Conventions
//! -----------
//! - Events at exactly the grid time are included (post-jump value). The
//!   final value therefore reflects every event in the window.
//! - `intensities` has shape `(D, times.len())`; row `i` is dimension `i`.
use crate::hawkes::{
    core::{decays::DecayMatrix, events::EventData, params::HawkesParams},
    errors::{HawkesError, HawkesResult},
};
use ndarray::{Array1, Array2};

/// Intensity path of every dimension over a time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedIntensity {
    /// Grid times, strictly increasing, last entry equal to the horizon.
    pub times: Array1<f64>,
    /// `λ_i(times[m])`, shape `(D, times.len())`.
    pub intensities: Array2<f64>,
}

impl EstimatedIntensity {
    /// Intensity of `dim` at the last grid point.
    pub fn final_value(&self, dim: usize) -> Option<f64> {
        if dim >= self.intensities.nrows() {
            return None;
        }
        self.intensities.row(dim).last().copied()
    }
}

/// Uniform grid over `[0, end_time]` closed by `end_time`.
///
/// Errors
/// ------
/// - `HawkesError::InvalidStep` for a non-finite or non-positive `step`.
pub fn intensity_grid(end_time: f64, step: f64) -> HawkesResult<Array1<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(HawkesError::InvalidStep { value: step });
    }
    let mut times = Vec::new();
    let mut m = 0_u64;
    loop {
        let t = m as f64 * step;
        if t >= end_time {
            break;
        }
        times.push(t);
        m += 1;
    }
    times.push(end_time);
    Ok(Array1::from(times))
}

/// Evaluate every dimension's intensity on the grid for `step`.
///
/// Errors
/// ------
/// - `HawkesError::InvalidStep` from [`intensity_grid`].
/// - `HawkesError::DimensionMismatch` / `DecayShapeMismatch` when the
///   parameters or decays do not match the events.
pub fn evaluate_intensity(
    params: &HawkesParams, decays: &DecayMatrix, events: &EventData, step: f64,
) -> HawkesResult<EstimatedIntensity> {
    let dims = events.n_dims();
    if params.dims() != dims {
        return Err(HawkesError::DimensionMismatch { expected: params.dims(), actual: dims });
    }
    decays.ensure_dims(dims)?;
    let times = intensity_grid(events.end_time(), step)?;

    let mut intensities = Array2::<f64>::zeros((dims, times.len()));
    for i in 0..dims {
        intensities.row_mut(i).fill(params.baseline[i]);
        for j in 0..dims {
            let alpha = params.adjacency[[i, j]];
            if alpha == 0.0 {
                continue;
            }
            let beta = decays.get(i, j);
            let sources = events.realization(j);
            let mut state = 0.0;
            let mut t_ref = 0.0;
            let mut next = 0;
            for (m, &t) in times.iter().enumerate() {
                state *= (-beta * (t - t_ref)).exp();
                t_ref = t;
                while next < sources.len() && sources[next] <= t {
                    state += (-beta * (t - sources[next])).exp();
                    next += 1;
                }
                intensities[[i, m]] += alpha * beta * state;
            }
        }
    }

    Ok(EstimatedIntensity { times, intensities })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Grid construction, including a horizon on and off the step lattice.
    // - Intensity values against a direct kernel sum, including the
    //   post-jump convention at event times.
    // - Step and dimension validation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The grid is the step lattice below the horizon, closed by the horizon.
    //
    // Given
    // -----
    // - `end_time = 3.0` and `2.5` with `step = 1.0`.
    //
    // Expect
    // ------
    // - `[0, 1, 2, 3]` and `[0, 1, 2, 2.5]`.
    fn grid_is_closed_by_end_time() {
        assert_eq!(intensity_grid(3.0, 1.0).unwrap(), array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(intensity_grid(2.5, 1.0).unwrap(), array![0.0, 1.0, 2.0, 2.5]);
    }

    #[test]
    // Purpose
    // -------
    // Non-positive or non-finite steps are rejected.
    //
    // Given
    // -----
    // - Steps 0, -1 and NaN.
    //
    // Expect
    // ------
    // - `InvalidStep`.
    fn grid_rejects_invalid_step() {
        assert_eq!(intensity_grid(3.0, 0.0).unwrap_err(), HawkesError::InvalidStep {
            value: 0.0
        });
        assert!(matches!(intensity_grid(3.0, -1.0), Err(HawkesError::InvalidStep { .. })));
        assert!(matches!(intensity_grid(3.0, f64::NAN), Err(HawkesError::InvalidStep { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Grid values equal the direct kernel sum with events at `t` included.
    //
    // Given
    // -----
    // - Buys `[1, 2]`, sells `[2, 3]`, uniform decay 0.5, hand-picked
    //   parameters.
    //
    // Expect
    // ------
    // - Each grid value matches `μ_i + Σ_j α_ij β Σ_{t_l ≤ t} e^{−β (t − t_l)}`.
    fn values_match_direct_sum() {
        let events = EventData::from_slices(&[&[1.0, 2.0], &[2.0, 3.0]]).unwrap();
        let decays = DecayMatrix::uniform(0.5, 2).unwrap();
        let params = HawkesParams::new(array![0.3, 0.2], array![[0.4, 0.1], [0.25, 0.6]]).unwrap();

        let est = evaluate_intensity(&params, &decays, &events, 1.0).unwrap();

        assert_eq!(est.times, array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(est.intensities.dim(), (2, 4));
        for (m, &t) in est.times.iter().enumerate() {
            for i in 0..2 {
                let mut expected = params.baseline[i];
                for j in 0..2 {
                    for &s in events.realization(j).iter().filter(|&&s| s <= t) {
                        expected += params.adjacency[[i, j]] * 0.5 * (-0.5 * (t - s)).exp();
                    }
                }
                assert_relative_eq!(est.intensities[[i, m]], expected, epsilon = 1e-12);
            }
        }
        assert_eq!(est.intensities[[0, 0]], 0.3);
    }

    #[test]
    // Purpose
    // -------
    // `final_value` reads the last grid column and guards the dimension.
    //
    // Given
    // -----
    // - A hand-built 2×3 intensity matrix.
    //
    // Expect
    // ------
    // - Last column values, `None` for an out-of-range dimension.
    fn final_value_reads_last_column() {
        let est = EstimatedIntensity {
            times: array![0.0, 1.0, 1.5],
            intensities: array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
        };

        assert_eq!(est.final_value(0), Some(3.0));
        assert_eq!(est.final_value(1), Some(6.0));
        assert_eq!(est.final_value(2), None);
    }

    #[test]
    // Purpose
    // -------
    // Parameters for the wrong dimension are rejected.
    //
    // Given
    // -----
    // - Univariate parameters with bivariate events.
    //
    // Expect
    // ------
    // - `DimensionMismatch { expected: 1, actual: 2 }`.
    fn rejects_dimension_mismatch() {
        let events = EventData::from_slices(&[&[1.0], &[2.0]]).unwrap();
        let decays = DecayMatrix::uniform(1.0, 2).unwrap();
        let params = HawkesParams::new(array![0.3], array![[0.1]]).unwrap();

        let err = evaluate_intensity(&params, &decays, &events, 1.0).unwrap_err();

        assert_eq!(err, HawkesError::DimensionMismatch { expected: 1, actual: 2 });
    }
}
