//! loglik_optimizer::builders — configured L-BFGS solvers.
//!
//! Purpose
//! -------
//! Turn an [`MLEOptions`] into a ready-to-run L-BFGS solver for either line
//! search. The builders only touch solver-level settings (history length
//! and stopping tolerances); the starting point and the iteration cap are
//! executor settings applied in [`run`](super::run).
//!
//! Conventions
//! -----------
//! - `opts.lbfgs_mem = None` means [`DEFAULT_LBFGS_MEM`].
//! - A tolerance left as `None` keeps argmin's own default for it.
//! - argmin rejects a bad tolerance with its own error type; it reaches the
//!   caller as an [`OptError`](crate::optimization::errors::OptError).
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{
            DEFAULT_LBFGS_MEM, HagerZhangLS, Lbfgs, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS,
        },
    },
};

/// L-BFGS with a Hager–Zhang line search, configured from `opts`.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    build_lbfgs(HagerZhangLS::new(), opts)
}

/// L-BFGS with a More–Thuente line search, configured from `opts`.
///
/// This is the line search used by the default [`MLEOptions`].
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    build_lbfgs(MoreThuenteLS::new(), opts)
}

/// Wrap `line_search` in an L-BFGS solver and apply the tolerances in `opts`.
///
/// # Errors
/// - Any tolerance argmin refuses (non-finite or negative).
pub fn build_lbfgs<L>(line_search: L, opts: &MLEOptions) -> OptResult<Lbfgs<L>> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let mut solver = Lbfgs::<L>::new(line_search, mem);
    if let Some(tol_grad) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(tol_grad)?;
    }
    if let Some(tol_cost) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(tol_cost)?;
    }
    Ok(solver)
}
