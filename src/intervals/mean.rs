//! intervals::mean — confidence intervals for a population mean.
//!
//! Purpose
//! -------
//! Construct the two textbook intervals for a single mean: the z-based
//! interval when the population standard deviation σ is known, and the
//! t-based interval (df = n − 1) when σ is estimated from the sample.
//!
//! Key behaviors
//! -------------
//! - Both intervals follow estimate ± (critical value × standard error)
//!   with SE = σ/√n (known σ) or s/√n (unknown σ).
//! - The critical probability for confidence level c is 1 − (1 − c)/2.
//!
//! Invariants & assumptions
//! ------------------------
//! - Known-σ interval needs n ≥ 1 and σ > 0; unknown-σ needs n ≥ 2 so
//!   the sample standard deviation exists.
//! - Observations are assumed to be an i.i.d. sample from a population
//!   whose mean is the target parameter; normality (or n large enough for
//!   the CLT) is the caller's modeling judgment.
//!
//! Downstream usage
//! ----------------
//! - The dashboard's "confidence interval for the mean" pages call these
//!   with the satisfaction or age columns; the hypothesis tests in
//!   `hypothesis::mean` are the decision-rule mirror of these intervals.
//!
//! Testing notes
//! -------------
//! - Unit tests pin a hand-computed 95% interval, verify the t interval
//!   is wider than the z interval on the same data, and exercise the
//!   parameter guards. Monte Carlo coverage of the known-σ interval is
//!   asserted in the integration suite.

use crate::descriptive::summary::{mean, sample_std};
use crate::distributions::quantiles::{normal_quantile, t_quantile};
use crate::errors::StatResult;
use crate::intervals::result::IntervalResult;
use crate::validation::{validate_sample, validate_sigma, validate_unit_open};

/// Confidence interval for the mean with known population σ.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; n ≥ 1.
/// - `sigma`: `f64`
///   Known population standard deviation; must be finite and > 0.
/// - `confidence`: `f64`
///   Confidence level, strictly inside (0, 1).
///
/// Returns
/// -------
/// `StatResult<IntervalResult>`
///   x̄ ± z₁₋α/₂ · σ/√n, with α = 1 − confidence.
///
/// Errors
/// ------
/// - `StatError::InsufficientData` for an empty sample.
/// - `StatError::InvalidParameter` for out-of-range `sigma` or
///   `confidence`.
/// - `StatError::NonFiniteValue` for NaN/∞ observations.
pub fn mean_known_sigma(data: &[f64], sigma: f64, confidence: f64) -> StatResult<IntervalResult> {
    validate_sample(data, 1)?;
    validate_sigma("sigma", sigma)?;
    validate_unit_open("confidence", confidence)?;

    let estimate = mean(data)?;
    let z = normal_quantile(1.0 - (1.0 - confidence) / 2.0)?;
    let se = sigma / (data.len() as f64).sqrt();

    Ok(IntervalResult::from_margin(estimate, z * se, confidence))
}

/// Confidence interval for the mean with σ estimated from the sample.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; n ≥ 2.
/// - `confidence`: `f64`
///   Confidence level, strictly inside (0, 1).
///
/// Returns
/// -------
/// `StatResult<IntervalResult>`
///   x̄ ± t₁₋α/₂(n−1) · s/√n.
///
/// Errors
/// ------
/// - `StatError::InsufficientData` when n < 2.
/// - `StatError::InvalidParameter` for an out-of-range `confidence`.
/// - `StatError::NonFiniteValue` for NaN/∞ observations.
pub fn mean_unknown_sigma(data: &[f64], confidence: f64) -> StatResult<IntervalResult> {
    validate_sample(data, 2)?;
    validate_unit_open("confidence", confidence)?;

    let estimate = mean(data)?;
    let s = sample_std(data)?;
    let df = (data.len() - 1) as f64;
    let t = t_quantile(1.0 - (1.0 - confidence) / 2.0, df)?;
    let se = s / (data.len() as f64).sqrt();

    Ok(IntervalResult::from_margin(estimate, t * se, confidence))
}
