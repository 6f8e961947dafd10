//! Integration tests for the buy/sell intensity-ratio pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: raw buy/sell timestamps, collision shift,
//!   event validation, penalized Hawkes fit with L-BFGS, intensity grid, and
//!   the final ratio.
//! - Exercise both goodness-of-fit criteria and non-default optimizer
//!   settings through the public API only.
//!
//! Coverage
//! --------
//! - `intensity_ratio`:
//!   - `get_intensity_ratio` on small and moderate inputs.
//!   - `IntensityRatioEstimator::with_options` with log-likelihood fitting.
//! - `hawkes::models::HawkesExpKern`:
//!   - `fit_in_place` and `fitted_intensity` on the same realization.
//! - `optimization::loglik_optimizer`:
//!   - L-BFGS with custom `MLEOptions`.
//!
//! Exclusions
//! ----------
//! - Gradient and kernel-statistic correctness, covered by unit tests.
//! - Python bindings.
use hawkes_intensity::{
    hawkes::{
        HawkesError,
        core::{
            decays::DecayMatrix,
            events::EventData,
            options::{GoodnessOfFit, HawkesOptions, Init},
            penalty::Penalty,
        },
        models::HawkesExpKern,
    },
    intensity_ratio::{INTENSITY_STEP, IntensityRatioEstimator, get_intensity_ratio},
    optimization::loglik_optimizer::{LineSearcher, MLEOptions, Tolerances},
};

/// Evenly spaced timestamps `offset, offset + spacing, …` (`n` of them).
fn regular_stream(n: usize, offset: f64, spacing: f64) -> Vec<f64> {
    (0..n).map(|k| offset + spacing * k as f64).collect()
}

/// Irregular but sorted timestamps built from a fixed increment pattern.
fn irregular_stream(n: usize, offset: f64) -> Vec<f64> {
    let pattern = [0.3, 1.1, 0.2, 0.7, 0.45];
    let mut t = offset;
    (0..n)
        .map(|k| {
            t += pattern[k % pattern.len()];
            t
        })
        .collect()
}

fn likelihood_options(line_searcher: LineSearcher) -> HawkesOptions {
    let tols = Tolerances::new(Some(1e-6), None, Some(200))
        .expect("Tolerances::new should accept positive tolerances");
    let mle_opts = MLEOptions::new(tols, line_searcher, false, Some(5))
        .expect("MLEOptions::new should accept a positive L-BFGS memory");
    HawkesOptions::new(GoodnessOfFit::LogLikelihood, Penalty::default(), Init::Default, mle_opts)
}

#[test]
// Purpose
// -------
// The reference scenario without collisions yields a finite positive ratio.
//
// Given
// -----
// - decay 0.5, buys `[1, 2, 3]`, sells `[1.5, 2.5]`.
//
// Expect
// ------
// - `ratio.is_finite() && ratio > 0`.
fn reference_scenario_is_finite_and_positive() {
    let ratio = get_intensity_ratio(0.5, &[1.0, 2.0, 3.0], &[1.5, 2.5]).unwrap();

    assert!(ratio.is_finite());
    assert!(ratio > 0.0);
}

#[test]
// Purpose
// -------
// A colliding buy is fitted exactly as if it had been shifted by hand.
//
// Given
// -----
// - decay 0.5, buys `[1, 2]`, sells `[2, 3]`, and the pre-shifted buys
//   `[1, 2 + 1e-4]`.
//
// Expect
// ------
// - Bitwise identical ratios; the collision input leaves its slice intact.
fn collision_matches_manual_shift() {
    let buys = [1.0, 2.0];
    let sells = [2.0, 3.0];

    let ratio = get_intensity_ratio(0.5, &buys, &sells).unwrap();
    let manual = get_intensity_ratio(0.5, &[1.0, 2.0 + 1e-4], &sells).unwrap();

    assert_eq!(ratio, manual);
    assert!(ratio.is_finite() && ratio > 0.0);
    assert_eq!(buys, [1.0, 2.0]);
}

#[test]
// Purpose
// -------
// Identical inputs give identical outputs.
//
// Given
// -----
// - Two irregular streams and three repeated calls.
//
// Expect
// ------
// - Bitwise identical ratios.
fn repeated_calls_are_deterministic() {
    let buys = irregular_stream(25, 0.0);
    let sells = irregular_stream(18, 0.15);

    let first = get_intensity_ratio(1.0, &buys, &sells).unwrap();
    let second = get_intensity_ratio(1.0, &buys, &sells).unwrap();
    let third = get_intensity_ratio(1.0, &buys, &sells).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
// Purpose
// -------
// A side that trades four times as often ends with the higher intensity.
//
// Given
// -----
// - 40 buys every 0.25 and 10 sells every 1.0 over `[0.1, 10]`.
//
// Expect
// ------
// - Ratio > 1.
fn busier_side_dominates_ratio() {
    let buys = regular_stream(40, 0.1, 0.25);
    let sells = regular_stream(10, 0.2, 1.0);

    let ratio = get_intensity_ratio(0.8, &buys, &sells).unwrap();

    assert!(ratio > 1.0, "ratio = {ratio}");
}

#[test]
// Purpose
// -------
// Empty inputs are rejected before fitting.
//
// Given
// -----
// - buys `[]`, sells `[1]`.
//
// Expect
// ------
// - `EmptySeries { dim: 0 }`.
fn empty_buys_are_rejected() {
    let err = get_intensity_ratio(0.5, &[], &[1.0]).unwrap_err();

    assert_eq!(err, HawkesError::EmptySeries { dim: 0 });
}

#[test]
// Purpose
// -------
// Log-likelihood fitting works through the estimator with non-default
// optimizer settings.
//
// Given
// -----
// - Irregular streams, `GoodnessOfFit::LogLikelihood`, default elastic net,
//   More–Thuente with L-BFGS memory 5 and at most 200 iterations.
//
// Expect
// ------
// - A finite positive ratio.
fn likelihood_estimator_runs_with_custom_optimizer() {
    let buys = irregular_stream(30, 0.0);
    let sells = irregular_stream(22, 0.05);
    let estimator =
        IntensityRatioEstimator::with_options(0.7, likelihood_options(LineSearcher::MoreThuente))
            .unwrap();

    let ratio = estimator.estimate(&buys, &sells).unwrap();

    assert!(ratio.is_finite() && ratio > 0.0, "ratio = {ratio}");
}

#[test]
// Purpose
// -------
// The model-level API agrees with the one-shot ratio.
//
// Given
// -----
// - A bivariate `HawkesExpKern` with uniform decay 0.5 and default options,
//   fitted in place on buys `[1, 2, 3]`, sells `[1.5, 2.5]`.
//
// Expect
// ------
// - Fit results are cached.
// - The ratio of final grid values equals `get_intensity_ratio`.
fn model_api_matches_one_shot_ratio() {
    let events = EventData::from_slices(&[&[1.0, 2.0, 3.0], &[1.5, 2.5]]).unwrap();
    let mut model =
        HawkesExpKern::new(DecayMatrix::uniform(0.5, 2).unwrap(), HawkesOptions::default());

    model.fit_in_place(&events).unwrap();
    let est = model.fitted_intensity(&events, INTENSITY_STEP).unwrap();

    assert!(model.results.is_some());
    assert_eq!(*est.times.last().unwrap(), 3.0);
    let ratio = est.final_value(0).unwrap() / est.final_value(1).unwrap();
    assert_eq!(ratio, get_intensity_ratio(0.5, &[1.0, 2.0, 3.0], &[1.5, 2.5]).unwrap());
}
