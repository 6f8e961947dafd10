//! Executor wiring shared by every line-search variant.
//!
//! [`run_solver`] hands an [`ArgMinAdapter`] and a configured solver to
//! argmin's `Executor`, applies the starting point and iteration cap, and
//! converts the final state into an [`OptimOutcome`] expressed in objective
//! space (`ℓ`, not the cost).
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        Grad, LogLikelihood, MLEOptions, OptimOutcome, Theta, adapter::ArgMinAdapter,
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, IterState, Solver, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Solver state used by the L-BFGS runs.
pub type LbfgsState = IterState<Theta, Grad, (), (), (), f64>;

/// Run `solver` on `problem` from `theta0` and normalize the result.
///
/// # Behavior
/// - `opts.tols.max_iter`, when set, caps the executor's iterations.
/// - With the `obs_slog` feature and `opts.verbose`, the objective (and
///   gradient norm) at `theta0` is printed to stderr and argmin's terminal
///   slog observer reports every iteration.
///
/// # Errors
/// - Solver and line-search failures, with objective errors raised inside
///   `value`/`grad` surfacing as their original `OptError` variant.
/// - `OptError::MissingThetaHat` / `InvalidThetaHat` / `NonFiniteCost` when
///   the final state is unusable.
pub fn run_solver<'a, F, S>(
    theta0: Theta, opts: &MLEOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
    S: Solver<ArgMinAdapter<'a, F>, LbfgsState> + Send + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        report_start(&theta0, &problem)?;
    }

    let max_iter = opts.tols.max_iter;
    #[cfg_attr(not(feature = "obs_slog"), allow(unused_mut))]
    let mut executor = Executor::new(problem, solver).configure(|state| {
        let state = state.param(theta0);
        match max_iter {
            Some(n) => state.max_iters(n as u64),
            None => state,
        }
    });

    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        executor = executor.add_observer(
            argmin_observer_slog::SlogLogger::term_noblock(),
            argmin::core::observers::ObserverMode::Always,
        );
    }

    let final_state = executor.run()?.state().clone();
    into_outcome(final_state)
}

fn into_outcome(mut state: LbfgsState) -> OptResult<OptimOutcome> {
    let iterations = state.get_iter();
    let fn_evals = state.get_func_counts().clone();
    let status = state.get_termination_status().clone();
    let grad = state.take_gradient();
    // argmin tracks the cost; the outcome reports the objective.
    let value = -state.get_best_cost();
    OptimOutcome::new(state.take_best_param(), value, status, iterations, fn_evals, grad)
}

#[cfg(feature = "obs_slog")]
fn report_start<F: LogLikelihood>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()> {
    let objective = -problem.cost(theta0)?;
    match problem.gradient(theta0) {
        Ok(g) => eprintln!("start: objective = {objective:.6}, |grad| = {:.6}", g.l2_norm()),
        Err(_) => eprintln!("start: objective = {objective:.6}"),
    }
    Ok(())
}
