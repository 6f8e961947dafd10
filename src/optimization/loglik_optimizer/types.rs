//! Numeric aliases shared by the optimizer.
//!
//! Everything the L-BFGS driver touches is an `ndarray` vector over `f64`
//! (`Theta`, `Grad`) or a scalar `Cost`. The solver aliases pin argmin's
//! generics to those shapes so the builders and the runner can name a
//! concrete solver without repeating the type parameters.
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Unconstrained parameter vector `θ`.
pub type Theta = Array1<f64>;

/// Gradient with the shape of [`Theta`].
pub type Grad = Array1<f64>;

/// Scalar handed to argmin; always `c(θ) = −ℓ(θ)`.
pub type Cost = f64;

/// argmin's evaluation counters (`"cost_count"`, `"gradient_count"`, ...).
pub type FnEvalMap = HashMap<String, u64>;

/// L-BFGS history length when `MLEOptions::lbfgs_mem` is unset.
pub const DEFAULT_LBFGS_MEM: usize = 7;

pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS over the crate's numeric types with line search `L`.
pub type Lbfgs<L> = LBFGS<L, Theta, Grad, Cost>;

pub type LbfgsHagerZhang = Lbfgs<HagerZhangLS>;

pub type LbfgsMoreThuente = Lbfgs<MoreThuenteLS>;
