//! Goodness-of-fit criteria for exponential-kernel Hawkes models.
//!
//! Both criteria are evaluated from [`ExpKernelStats`] in model space
//! `(μ, α)`; the model layer handles the θ-space chain rule and the
//! penalty. `N` below is the total event count and `T` the horizon.
//!
//! - Least squares:
//!   `R = (1/N) Σ_i [μ_i² T + 2 μ_i α_iᵀ G_i + α_iᵀ H_i α_i − 2 (n_i μ_i + α_iᵀ S_i)]`
//!   with `G_i`, `H_i`, `S_i` the integrals, Gram matrix and event-feature
//!   sums of target `i`.
//! - Log-likelihood:
//!   `ℓ/N = (1/N) Σ_i [Σ_k log λ_i(t_k^i) − μ_i T − α_iᵀ G_i]`.
use crate::hawkes::{
    core::kernel::ExpKernelStats,
    errors::{HawkesError, HawkesResult},
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Model-space gradient `(∂/∂μ, ∂/∂α)`.
pub type ModelGrad = (Array1<f64>, Array2<f64>);

/// Least-squares contrast `R(μ, α)`; lower is better.
pub fn least_squares(
    baseline: ArrayView1<f64>, adjacency: ArrayView2<f64>, stats: &ExpKernelStats,
) -> f64 {
    let t = stats.end_time;
    let total: f64 = (0..stats.dims)
        .map(|i| {
            let mu = baseline[i];
            let a = adjacency.row(i);
            let integral_sq = mu * mu * t
                + 2.0 * mu * a.dot(&stats.integrals.row(i))
                + a.dot(&stats.gram[i].dot(&a));
            let at_events = stats.counts[i] * mu + a.dot(&stats.feature_sums.row(i));
            integral_sq - 2.0 * at_events
        })
        .sum();
    total / stats.total_events as f64
}

/// Gradient of [`least_squares`] in model space.
pub fn least_squares_grad(
    baseline: ArrayView1<f64>, adjacency: ArrayView2<f64>, stats: &ExpKernelStats,
) -> ModelGrad {
    let dims = stats.dims;
    let scale = 2.0 / stats.total_events as f64;
    let mut d_mu = Array1::<f64>::zeros(dims);
    let mut d_alpha = Array2::<f64>::zeros((dims, dims));
    for i in 0..dims {
        let mu = baseline[i];
        let a = adjacency.row(i);
        let g = stats.integrals.row(i);
        d_mu[i] = scale * (mu * stats.end_time + a.dot(&g) - stats.counts[i]);
        let row = &g * mu + &stats.gram[i].dot(&a) - &stats.feature_sums.row(i);
        d_alpha.row_mut(i).assign(&(row * scale));
    }
    (d_mu, d_alpha)
}

/// Intensities `λ_i(t_k^i)` of target `i` at its own events.
///
/// Errors
/// ------
/// - `HawkesError::NonPositiveIntensity` at the first event whose intensity
///   is not finite and strictly positive.
fn event_intensities(
    i: usize, baseline: ArrayView1<f64>, adjacency: ArrayView2<f64>, stats: &ExpKernelStats,
) -> HawkesResult<Array1<f64>> {
    let lambda = stats.event_features[i].dot(&adjacency.row(i)) + baseline[i];
    for (index, &value) in lambda.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(HawkesError::NonPositiveIntensity { dim: i, index, value });
        }
    }
    Ok(lambda)
}

/// Normalized log-likelihood `ℓ/N`; higher is better.
pub fn log_likelihood(
    baseline: ArrayView1<f64>, adjacency: ArrayView2<f64>, stats: &ExpKernelStats,
) -> HawkesResult<f64> {
    let mut total = 0.0;
    for i in 0..stats.dims {
        let lambda = event_intensities(i, baseline, adjacency, stats)?;
        let compensator =
            baseline[i] * stats.end_time + adjacency.row(i).dot(&stats.integrals.row(i));
        total += lambda.mapv(f64::ln).sum() - compensator;
    }
    Ok(total / stats.total_events as f64)
}

/// Gradient of [`log_likelihood`] in model space.
pub fn log_likelihood_grad(
    baseline: ArrayView1<f64>, adjacency: ArrayView2<f64>, stats: &ExpKernelStats,
) -> HawkesResult<ModelGrad> {
    let dims = stats.dims;
    let scale = 1.0 / stats.total_events as f64;
    let mut d_mu = Array1::<f64>::zeros(dims);
    let mut d_alpha = Array2::<f64>::zeros((dims, dims));
    for i in 0..dims {
        let inv = event_intensities(i, baseline, adjacency, stats)?.mapv(f64::recip);
        d_mu[i] = scale * (inv.sum() - stats.end_time);
        let row = stats.event_features[i].t().dot(&inv) - &stats.integrals.row(i);
        d_alpha.row_mut(i).assign(&(row * scale));
    }
    Ok((d_mu, d_alpha))
}
