//! Learner interface shared by Hawkes estimators.
//!
//! [`HawkesLearner`] separates "fit parameters to events" from "evaluate the
//! fitted intensity on a grid" so callers such as
//! [`IntensityRatioEstimator`](crate::intensity_ratio::IntensityRatioEstimator)
//! can swap the estimator (or a test double) without touching the pipeline.
use crate::hawkes::{
    core::{events::EventData, intensity::EstimatedIntensity},
    errors::HawkesResult,
};

/// A Hawkes estimator that can be fitted and then queried for intensities.
///
/// - `type Fitted`: whatever the learner needs to evaluate intensities
///   after fitting (parameters for parametric kernels).
///
/// Required:
/// - `fit(&EventData) -> HawkesResult<Fitted>`: estimate from one
///   realization. Implementations must not retain state between calls.
/// - `estimate_intensity(&Fitted, &EventData, step)`: evaluate every
///   dimension on the grid `0, step, …, T` (last point is the horizon).
pub trait HawkesLearner {
    type Fitted;

    fn fit(&self, events: &EventData) -> HawkesResult<Self::Fitted>;

    fn estimate_intensity(
        &self, fitted: &Self::Fitted, events: &EventData, step: f64,
    ) -> HawkesResult<EstimatedIntensity>;
}
