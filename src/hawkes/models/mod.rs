//! models — Hawkes estimators built on the shared core and optimizer.
//!
//! - [`HawkesLearner`]: fit / estimate-intensity interface.
//! - [`HawkesExpKern`]: exponential kernels with fixed decays, fitted by
//!   penalized least squares or log-likelihood.
//! - [`objectives`]: closed-form criteria and their model-space gradients.

pub mod exp_kern;
pub mod objectives;
pub mod traits;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::exp_kern::HawkesExpKern;
pub use self::traits::HawkesLearner;
