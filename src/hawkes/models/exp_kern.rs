//! Multivariate Hawkes model with fixed exponential-kernel decays.
//!
//! This module wires [`HawkesExpKern`] to the `LogLikelihood` trait so the
//! shared L-BFGS driver can estimate baselines `μ` and the adjacency `α`
//! with the decays `β` held fixed.
//!
//! Key ideas:
//! - Parameters live in unconstrained space: `μ = softplus(θ_μ)` and
//!   `α = softplus(θ_α)` (row-major), so every probe of the line search is a
//!   valid model.
//! - Kernel sums are precomputed once per fit into [`ExpKernelStats`]; each
//!   objective evaluation then costs O(N·D) for the likelihood and O(D³)
//!   for least squares.
//! - The optimizer maximizes `−R(μ, α) − P(α)` (least squares) or
//!   `ℓ(μ, α)/N − P(α)` (log-likelihood), where `P` is the configured
//!   [`Penalty`](crate::hawkes::core::penalty::Penalty).
//! - The gradient is analytic: model-space partials are multiplied by
//!   `σ(θ)`, the derivative of softplus.
use crate::{
    hawkes::{
        core::{
            decays::DecayMatrix,
            events::EventData,
            intensity::{EstimatedIntensity, evaluate_intensity},
            kernel::ExpKernelStats,
            options::{GoodnessOfFit, HawkesOptions},
            params::{HawkesParams, map_theta, theta_len, validate_theta},
        },
        errors::{HawkesError, HawkesResult},
        models::{
            objectives::{
                ModelGrad, least_squares, least_squares_grad, log_likelihood,
                log_likelihood_grad,
            },
            traits::HawkesLearner,
        },
    },
    optimization::{
        errors::OptResult,
        loglik_optimizer::{Grad, LogLikelihood, OptimOutcome, Theta, maximize},
        numerical_stability::transformations::safe_logistic,
    },
};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Exponential-kernel Hawkes estimator.
///
/// Holds the fixed decays and the estimation options. [`fit_in_place`]
/// caches the last optimizer outcome and the fitted parameters; the
/// [`HawkesLearner`] implementation is stateless and returns the
/// parameters instead.
///
/// [`fit_in_place`]: HawkesExpKern::fit_in_place
#[derive(Debug, Clone, PartialEq)]
pub struct HawkesExpKern {
    /// Fixed decays `β_ij`, `D × D`.
    pub decays: DecayMatrix,
    /// Model options.
    pub options: HawkesOptions,
    /// Fit results (populated after `fit_in_place`).
    pub results: Option<OptimOutcome>,
    /// Fitted parameters (populated after `fit_in_place`).
    pub fitted_params: Option<HawkesParams>,
}

impl HawkesExpKern {
    pub fn new(decays: DecayMatrix, options: HawkesOptions) -> HawkesExpKern {
        HawkesExpKern { decays, options, results: None, fitted_params: None }
    }

    pub fn dims(&self) -> usize {
        self.decays.dims()
    }

    /// Optimizer-space starting point for `events` per `options.init`.
    pub fn initial_theta(&self, events: &EventData) -> HawkesResult<Theta> {
        Ok(self.options.init.resolve(events)?.to_theta())
    }

    /// Fit and cache `results` and `fitted_params`.
    ///
    /// ## Errors
    /// - `HawkesError::DecayShapeMismatch` when the events' dimension differs
    ///   from the decay matrix.
    /// - `HawkesError::FittingFailed` wrapping any optimizer failure.
    pub fn fit_in_place(&mut self, events: &EventData) -> HawkesResult<()> {
        let (params, outcome) = self.run(events)?;
        self.results = Some(outcome);
        self.fitted_params = Some(params);
        Ok(())
    }

    /// Intensity of the cached fit on the grid `0, step, …, T`.
    ///
    /// ## Errors
    /// - `HawkesError::ModelNotFitted` before [`fit_in_place`](Self::fit_in_place).
    /// - Propagates grid and dimension errors from [`evaluate_intensity`].
    pub fn fitted_intensity(&self, events: &EventData, step: f64) -> HawkesResult<EstimatedIntensity> {
        let params = self.fitted_params.as_ref().ok_or(HawkesError::ModelNotFitted)?;
        evaluate_intensity(params, &self.decays, events, step)
    }

    /// Unpenalized goodness of fit of `params` on `events`; higher is better.
    ///
    /// Returns `−R` for least squares and `ℓ/N` for the log-likelihood.
    pub fn score(&self, params: &HawkesParams, events: &EventData) -> HawkesResult<f64> {
        if params.dims() != events.n_dims() {
            return Err(HawkesError::DimensionMismatch {
                expected: params.dims(),
                actual: events.n_dims(),
            });
        }
        let stats = ExpKernelStats::compute(events, &self.decays)?;
        self.fit_value(params.baseline.view(), params.adjacency.view(), &stats)
    }

    fn run(&self, events: &EventData) -> HawkesResult<(HawkesParams, OptimOutcome)> {
        let stats = ExpKernelStats::compute(events, &self.decays)?;
        let theta0 = self.initial_theta(events)?;
        let outcome = maximize(self, theta0, &stats, &self.options.mle_opts)?;
        let params = HawkesParams::from_theta(outcome.theta_hat.view(), stats.dims)?;
        Ok((params, outcome))
    }

    fn fit_value(
        &self, baseline: ArrayView1<f64>, adjacency: ArrayView2<f64>, stats: &ExpKernelStats,
    ) -> HawkesResult<f64> {
        match self.options.gof {
            GoodnessOfFit::LeastSquares => Ok(-least_squares(baseline, adjacency, stats)),
            GoodnessOfFit::LogLikelihood => log_likelihood(baseline, adjacency, stats),
        }
    }

    fn fit_grad(
        &self, baseline: ArrayView1<f64>, adjacency: ArrayView2<f64>, stats: &ExpKernelStats,
    ) -> HawkesResult<ModelGrad> {
        match self.options.gof {
            GoodnessOfFit::LeastSquares => {
                let (d_mu, d_alpha) = least_squares_grad(baseline, adjacency, stats);
                Ok((-d_mu, -d_alpha))
            }
            GoodnessOfFit::LogLikelihood => log_likelihood_grad(baseline, adjacency, stats),
        }
    }
}

impl LogLikelihood for HawkesExpKern {
    type Data = ExpKernelStats;

    /// Penalized objective at `θ`.
    ///
    /// # Errors
    /// - `OptError::ThetaLengthMismatch` / `InvalidThetaInput` for a malformed θ.
    /// - `OptError::NonPositiveIntensity` when the log-likelihood meets a
    ///   non-positive intensity.
    fn value(&self, theta: &Theta, stats: &Self::Data) -> OptResult<f64> {
        validate_theta(theta.view(), stats.dims)?;
        let (baseline, adjacency) = map_theta(theta.view(), stats.dims);
        let fit = self.fit_value(baseline.view(), adjacency.view(), stats)?;
        Ok(fit - self.options.penalty.value(adjacency.view()))
    }

    /// Validate `θ` against the precomputed statistics and the decays.
    fn check(&self, theta: &Theta, stats: &Self::Data) -> OptResult<()> {
        self.decays.ensure_dims(stats.dims)?;
        validate_theta(theta.view(), stats.dims)?;
        Ok(())
    }

    /// Analytic gradient w.r.t. unconstrained `θ`.
    ///
    /// # Steps
    /// 1. Map `θ → (μ, α)` via softplus.
    /// 2. Evaluate the model-space partials of the fit criterion and subtract
    ///    the penalty gradient from the adjacency block.
    /// 3. Chain rule: multiply each entry by `σ(θ_k)`.
    fn grad(&self, theta: &Theta, stats: &Self::Data) -> OptResult<Grad> {
        let dims = stats.dims;
        validate_theta(theta.view(), dims)?;
        let (baseline, adjacency) = map_theta(theta.view(), dims);
        let (d_mu, mut d_alpha) = self.fit_grad(baseline.view(), adjacency.view(), stats)?;
        d_alpha -= &self.options.penalty.gradient(adjacency.view());

        let mut grad = Array1::<f64>::zeros(theta_len(dims));
        for (k, &g) in d_mu.iter().chain(d_alpha.iter()).enumerate() {
            grad[k] = g * safe_logistic(theta[k]);
        }
        Ok(grad)
    }
}

impl HawkesLearner for HawkesExpKern {
    type Fitted = HawkesParams;

    fn fit(&self, events: &EventData) -> HawkesResult<HawkesParams> {
        let (params, _) = self.run(events)?;
        Ok(params)
    }

    fn estimate_intensity(
        &self, fitted: &HawkesParams, events: &EventData, step: f64,
    ) -> HawkesResult<EstimatedIntensity> {
        evaluate_intensity(fitted, &self.decays, events, step)
    }
}
