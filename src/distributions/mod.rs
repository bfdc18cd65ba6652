//! distributions — reference-distribution quantiles and CDFs.
//!
//! Purpose
//! -------
//! Provide the single point of access to the Normal, Student-t, and
//! chi-square distributions used throughout the crate, wrapping `statrs`
//! behind validated quantile and CDF functions.
//!
//! Key behaviors
//! -------------
//! - Critical values for intervals and tests come from the
//!   `…_quantile(p, …)` functions (p = 1 − α/2 two-sided, 1 − α
//!   one-sided).
//! - p-values are derived from the `…_cdf(x, …)` functions by the
//!   hypothesis-test result machinery.
//!
//! Conventions
//! -----------
//! - Quantile levels live strictly inside (0, 1) and degrees of freedom
//!   are finite and positive; anything else is an
//!   `StatError::InvalidParameter`.
//!
//! Downstream usage
//! ----------------
//! - `intervals::*` and `hypothesis::*` go through this module for the
//!   continuous families; only the sign test's exact binomial null is
//!   built where it is used.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`quantiles`] pin standard table values and the
//!   quantile/CDF round trip.

pub mod quantiles;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::quantiles::{
    chi_square_cdf, chi_square_quantile, normal_cdf, normal_quantile, t_cdf, t_quantile,
};
