//! Errors for Hawkes models (event validation, configuration checks,
//! θ-mapping invariants, fitting failures, and intensity ratios).
//!
//! This module defines [`HawkesError`], used across the Python-facing API and
//! the internal Rust core. It implements `Display`/`Error` and converts to
//! `PyErr` for PyO3 when the `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy). `dim` is the dimension of
//!   the point process (0 = buys, 1 = sells in the intensity-ratio pipeline).
//! - Timestamps must be **finite, non-negative, and non-decreasing**.
//! - Optimizer/backend errors are wrapped in [`HawkesError::FittingFailed`]
//!   so the original [`OptError`] stays inspectable.
use crate::optimization::errors::OptError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for Hawkes operations that may produce [`HawkesError`].
pub type HawkesResult<T> = Result<T, HawkesError>;

/// Unified error type for Hawkes modeling.
///
/// Covers input degeneracy, configuration checks, parameter invariants,
/// estimation failures, and the final ratio computation. Implements
/// `Display`/`Error` and converts to a Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum HawkesError {
    // ---- Input / event validation ----
    /// No dimensions were supplied.
    NoDimensions,

    /// A dimension has no events.
    EmptySeries { dim: usize },

    /// A timestamp is NaN/±inf.
    NonFiniteTimestamp { dim: usize, index: usize, value: f64 },

    /// A timestamp is < 0.
    NegativeTimestamp { dim: usize, index: usize, value: f64 },

    /// Timestamps must be non-decreasing within a dimension.
    UnsortedTimestamps { dim: usize, index: usize, previous: f64, value: f64 },

    /// The observation horizon (last timestamp) is zero.
    ZeroHorizon,

    /// A collision-shifted buy overtook the next buy timestamp.
    DedupOrderViolation { index: usize, shifted: f64, next: f64 },

    // ---- Configuration ----
    /// Decays must be finite and > 0.
    InvalidDecay { value: f64 },

    /// Decay matrix must be square and match the number of dimensions.
    DecayShapeMismatch { expected: usize, rows: usize, cols: usize },

    /// Model dimension does not match the event data.
    DimensionMismatch { expected: usize, actual: usize },

    /// Penalty strength must be finite and >= 0; ratio must lie in [0, 1].
    InvalidPenalty { value: f64, reason: &'static str },

    /// Intensity grid step must be finite and > 0.
    InvalidStep { value: f64 },

    /// Fixed initial guess is inconsistent with the model.
    InvalidInit { reason: &'static str },

    /// Unknown goodness-of-fit name.
    InvalidGoodnessOfFit { name: String },

    // ---- Parameters ----
    /// Baseline entries must be finite and > 0.
    InvalidBaseline { index: usize, value: f64 },

    /// Adjacency entries must be finite and >= 0.
    InvalidAdjacency { row: usize, col: usize, value: f64 },

    /// Adjacency must be D×D for a baseline of length D.
    AdjacencyShapeMismatch { dims: usize, rows: usize, cols: usize },

    /// Theta length mismatch for the model's parameter count.
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// Unconstrained optimization input must have finite values.
    InvalidThetaInput { index: usize, value: f64 },

    /// Conditional intensity at an event must be strictly positive.
    NonPositiveIntensity { dim: usize, index: usize, value: f64 },

    // ---- Estimation ----
    /// Optimizer failed; carries the underlying optimizer error.
    FittingFailed { source: OptError },

    /// Model hasn't been fitted yet.
    ModelNotFitted,

    /// Intensity grid came back empty.
    EmptyIntensityGrid,

    // ---- Ratio ----
    /// Final intensities do not define a finite ratio.
    UndefinedRatio { buy: f64, sell: f64 },
}

impl std::error::Error for HawkesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HawkesError::FittingFailed { source } => Some(source),
            _ => None,
        }
    }
}

impl std::fmt::Display for HawkesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input / event validation ----
            HawkesError::NoDimensions => {
                write!(f, "At least one event dimension is required.")
            }
            HawkesError::EmptySeries { dim } => {
                write!(f, "Event series for dimension {dim} is empty.")
            }
            HawkesError::NonFiniteTimestamp { dim, index, value } => {
                write!(f, "Timestamp at index {index} of dimension {dim} is non-finite: {value}")
            }
            HawkesError::NegativeTimestamp { dim, index, value } => {
                write!(f, "Timestamp at index {index} of dimension {dim} is negative: {value}")
            }
            HawkesError::UnsortedTimestamps { dim, index, previous, value } => {
                write!(
                    f,
                    "Timestamps of dimension {dim} must be non-decreasing; index {index} has {value} after {previous}"
                )
            }
            HawkesError::ZeroHorizon => {
                write!(f, "Observation horizon must be > 0; all timestamps are zero.")
            }
            HawkesError::DedupOrderViolation { index, shifted, next } => {
                write!(
                    f,
                    "Collision shift moved buy at index {index} to {shifted}, past the next buy at {next}"
                )
            }
            // ---- Configuration ----
            HawkesError::InvalidDecay { value } => {
                write!(f, "Decay must be finite and > 0; got: {value}")
            }
            HawkesError::DecayShapeMismatch { expected, rows, cols } => {
                write!(f, "Decay matrix must be {expected}x{expected}; got {rows}x{cols}")
            }
            HawkesError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: model has {expected}, data has {actual}")
            }
            HawkesError::InvalidPenalty { value, reason } => {
                write!(f, "Invalid penalty parameter {value}: {reason}")
            }
            HawkesError::InvalidStep { value } => {
                write!(f, "Intensity grid step must be finite and > 0; got: {value}")
            }
            HawkesError::InvalidInit { reason } => {
                write!(f, "Invalid initial guess: {reason}")
            }
            HawkesError::InvalidGoodnessOfFit { name } => {
                write!(
                    f,
                    "Invalid goodness of fit '{name}' (expected 'least-squares' or 'likelihood')"
                )
            }
            // ---- Parameters ----
            HawkesError::InvalidBaseline { index, value } => {
                write!(f, "Baseline at index {index} must be finite and > 0; got: {value}")
            }
            HawkesError::InvalidAdjacency { row, col, value } => {
                write!(f, "Adjacency entry ({row}, {col}) must be finite and >= 0; got: {value}")
            }
            HawkesError::AdjacencyShapeMismatch { dims, rows, cols } => {
                write!(f, "Adjacency must be {dims}x{dims}; got {rows}x{cols}")
            }
            HawkesError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, got {actual}")
            }
            HawkesError::InvalidThetaInput { index, value } => {
                write!(f, "Theta input at index {index} must be finite, got {value}")
            }
            HawkesError::NonPositiveIntensity { dim, index, value } => {
                write!(
                    f,
                    "Intensity of dimension {dim} at event {index} must be > 0; got: {value}"
                )
            }
            // ---- Estimation ----
            HawkesError::FittingFailed { source } => {
                write!(f, "Fitting failed: {source}")
            }
            HawkesError::ModelNotFitted => {
                write!(f, "Model hasn't been fitted yet.")
            }
            HawkesError::EmptyIntensityGrid => {
                write!(f, "Estimated intensity grid is empty.")
            }
            // ---- Ratio ----
            HawkesError::UndefinedRatio { buy, sell } => {
                write!(f, "Intensity ratio is undefined: buy = {buy}, sell = {sell}")
            }
        }
    }
}

/// Convert a [`HawkesError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl From<HawkesError> for PyErr {
    fn from(err: HawkesError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<OptError> for HawkesError {
    fn from(err: OptError) -> HawkesError {
        HawkesError::FittingFailed { source: err }
    }
}
