//! regression — ordinary-least-squares fits for survey relationships.
//!
//! Purpose
//! -------
//! Fit one- and two-predictor linear models and report coefficients with
//! per-term inference through the shared [`RegressionResult`] value
//! object.
//!
//! Downstream usage
//! ----------------
//! - `fit_simple` backs the "does age predict satisfaction?" style
//!   questions; `fit_two_predictors` the two-factor variants. The Python
//!   bindings wrap the simple fit.

pub mod multiple;
pub mod result;
pub mod simple;

pub use multiple::fit_two_predictors;
pub use result::RegressionResult;
pub use simple::fit_simple;
