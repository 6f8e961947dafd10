//! intensity_ratio — buy/sell intensity ratio from a bivariate Hawkes fit.
//!
//! Purpose
//! -------
//! Turn two timestamp sequences (buys and sells) into a single scalar: the
//! fitted buy intensity divided by the fitted sell intensity at the end of
//! the observation window. Values above 1 indicate buy-side pressure.
//!
//! Key behaviors
//! -------------
//! - Reject empty inputs before any fitting work.
//! - Shift buys that coincide exactly with a sell by
//!   [`COLLISION_EPSILON`](crate::hawkes::core::dedup::COLLISION_EPSILON)
//!   so simultaneous cross-dimension events do not reach the fitter.
//! - Fit a bivariate exponential-kernel model with a uniform decay and the
//!   default elastic-net penalty, evaluate intensities on a grid of step
//!   [`INTENSITY_STEP`], and divide the last buy value by the last sell value.
//!
//! Invariants & assumptions
//! ------------------------
//! - Dimension 0 is buys, dimension 1 is sells.
//! - Every call builds and drops its own model; nothing is cached between
//!   calls, so identical inputs give identical outputs.
//!
//! Downstream usage
//! ----------------
//! - [`get_intensity_ratio`] is the one-shot entry point (also exported to
//!   Python). [`IntensityRatioEstimator`] exposes non-default options and
//!   substitute learners.
//!
//! Testing notes
//! -------------
//! - Unit tests below drive the pipeline with a recording learner to check
//!   preprocessing and ratio handling without optimizing; end-to-end fits
//!   live in `tests/integration_intensity_ratio.rs`.
use crate::hawkes::{
    core::{
        decays::DecayMatrix, dedup::shift_collisions, events::EventData, options::HawkesOptions,
    },
    errors::{HawkesError, HawkesResult},
    models::{exp_kern::HawkesExpKern, traits::HawkesLearner},
};
use ndarray::{Array1, ArrayView1};

/// Grid spacing used when evaluating the fitted intensities.
pub const INTENSITY_STEP: f64 = 1.0;

/// Dimension index of buy events.
pub const BUY_DIM: usize = 0;

/// Dimension index of sell events.
pub const SELL_DIM: usize = 1;

/// Buy/sell intensity-ratio pipeline around a [`HawkesLearner`].
#[derive(Debug, Clone)]
pub struct IntensityRatioEstimator<L: HawkesLearner = HawkesExpKern> {
    learner: L,
}

impl IntensityRatioEstimator<HawkesExpKern> {
    /// Bivariate exponential-kernel estimator with every decay set to `decay`
    /// and default [`HawkesOptions`].
    ///
    /// Errors
    /// ------
    /// - `HawkesError::InvalidDecay` for a non-finite or non-positive decay.
    pub fn new(decay: f64) -> HawkesResult<Self> {
        Self::with_options(decay, HawkesOptions::default())
    }

    /// As [`new`](Self::new) with explicit estimation options.
    pub fn with_options(decay: f64, options: HawkesOptions) -> HawkesResult<Self> {
        let decays = DecayMatrix::uniform(decay, 2)?;
        Ok(IntensityRatioEstimator { learner: HawkesExpKern::new(decays, options) })
    }
}

impl<L: HawkesLearner> IntensityRatioEstimator<L> {
    pub fn with_learner(learner: L) -> Self {
        IntensityRatioEstimator { learner }
    }

    pub fn learner(&self) -> &L {
        &self.learner
    }

    /// Validate inputs, apply the collision shift, and build [`EventData`].
    ///
    /// Errors
    /// ------
    /// - `HawkesError::EmptySeries` when either side has no events.
    /// - `HawkesError::DedupOrderViolation` when a shifted buy overtakes the
    ///   next buy.
    /// - Timestamp validation errors from [`EventData::new`].
    pub fn prepare_events(&self, buys: &[f64], sells: &[f64]) -> HawkesResult<EventData> {
        if buys.is_empty() {
            return Err(HawkesError::EmptySeries { dim: BUY_DIM });
        }
        if sells.is_empty() {
            return Err(HawkesError::EmptySeries { dim: SELL_DIM });
        }
        let sells = ArrayView1::from(sells);
        let shifted_buys = shift_collisions(ArrayView1::from(buys), sells)?;
        EventData::new(vec![shifted_buys, sells.to_owned()])
    }

    /// Fitted buy intensity over fitted sell intensity at the horizon.
    ///
    /// Errors
    /// ------
    /// - Everything [`prepare_events`](Self::prepare_events) reports.
    /// - Learner errors (`FittingFailed`, dimension and grid errors).
    /// - `HawkesError::UndefinedRatio` when the final sell intensity is not
    ///   strictly positive or either final value is not finite.
    pub fn estimate(&self, buys: &[f64], sells: &[f64]) -> HawkesResult<f64> {
        let events = self.prepare_events(buys, sells)?;
        let fitted = self.learner.fit(&events)?;
        let intensity = self.learner.estimate_intensity(&fitted, &events, INTENSITY_STEP)?;

        let buy = intensity.final_value(BUY_DIM).ok_or(HawkesError::EmptyIntensityGrid)?;
        let sell = intensity.final_value(SELL_DIM).ok_or(HawkesError::EmptyIntensityGrid)?;
        if !buy.is_finite() || !sell.is_finite() || sell <= 0.0 {
            return Err(HawkesError::UndefinedRatio { buy, sell });
        }
        Ok(buy / sell)
    }
}

/// Ratio of the fitted buy intensity to the fitted sell intensity at the
/// last observed event time.
///
/// Buys that equal a sell exactly are moved `1e-4` later before fitting.
/// The model is a bivariate Hawkes process with exponential kernels of
/// decay `decay`, fitted by least squares with an elastic-net penalty
/// (strength `1e-3`, ratio `0.95`).
///
/// Examples
/// --------
/// ```rust,no_run
/// use hawkes_intensity::intensity_ratio::get_intensity_ratio;
///
/// let ratio = get_intensity_ratio(0.5, &[1.0, 2.0, 3.0], &[1.5, 2.5]).unwrap();
/// assert!(ratio.is_finite() && ratio > 0.0);
/// ```
pub fn get_intensity_ratio(decay: f64, buys: &[f64], sells: &[f64]) -> HawkesResult<f64> {
    IntensityRatioEstimator::new(decay)?.estimate(buys, sells)
}

/// Owned copy of the buys after the collision shift, for inspection.
pub fn effective_buys(buys: &[f64], sells: &[f64]) -> HawkesResult<Array1<f64>> {
    shift_collisions(ArrayView1::from(buys), ArrayView1::from(sells))
}
