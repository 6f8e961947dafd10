//! [`maximize`]: the single entry point of the optimizer.
//!
//! It validates the start, wraps the model in an [`ArgMinAdapter`] (which
//! minimizes `−ℓ(θ)`), builds the L-BFGS variant named by
//! `opts.line_searcher`, and runs it through [`run_solver`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        run::run_solver,
        traits::{LineSearcher, LogLikelihood, MLEOptions},
    },
};

/// Maximize `f`'s objective over `θ`, starting from `theta0`.
///
/// # Errors
/// - Whatever `f.check(&theta0, data)` rejects, before any solver work.
/// - Builder errors for tolerances argmin refuses.
/// - Runtime errors from [`run_solver`].
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use hawkes_intensity::optimization::{
///     errors::OptResult,
///     loglik_optimizer::{maximize, LogLikelihood, MLEOptions, Theta},
/// };
///
/// // ℓ(θ) = −(θ₀ − 1)² − (θ₁ + 2)², maximized at (1, −2).
/// struct Bowl;
/// impl LogLikelihood for Bowl {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok(-(theta[0] - 1.0).powi(2) - (theta[1] + 2.0).powi(2))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = maximize(&Bowl, array![0.0, 0.0], &(), &MLEOptions::default())?;
/// assert!((out.theta_hat[0] - 1.0).abs() < 1e-4);
/// # Ok::<(), hawkes_intensity::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            run_solver(theta0, opts, problem, build_optimizer_more_thuente(opts)?)
        }
        LineSearcher::HagerZhang => {
            run_solver(theta0, opts, problem, build_optimizer_hager_zhang(opts)?)
        }
    }
}
