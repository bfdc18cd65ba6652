//! intervals::two_sample — confidence intervals for a difference of means.
//!
//! Purpose
//! -------
//! Construct the three classical intervals for μ₁ − μ₂: known population
//! variances (z), pooled sample variance under the equal-variance
//! assumption (t, df = n₁ + n₂ − 2), and the Welch interval for unequal
//! variances (t with Welch–Satterthwaite df). The pooled-variance and
//! Welch-df helpers are public because the matching hypothesis tests use
//! the same quantities.
//!
//! Key behaviors
//! -------------
//! - Known σ: SE = √(σ₁²/n₁ + σ₂²/n₂) with the normal critical value.
//! - Pooled: sp² = ((n₁−1)s₁² + (n₂−1)s₂²)/(n₁+n₂−2),
//!   SE = sp·√(1/n₁ + 1/n₂), df = n₁ + n₂ − 2.
//! - Welch: SE = √(s₁²/n₁ + s₂²/n₂), df from the Welch–Satterthwaite
//!   formula; fractional df are passed to the t distribution as-is.
//!
//! Invariants & assumptions
//! ------------------------
//! - Known-σ procedures need each group non-empty and both σ > 0;
//!   variance-estimating procedures need n ≥ 2 per group.
//! - A zero (or negative) pooled or combined variance means both groups
//!   are constant; no standard error exists and the procedures report
//!   `DegenerateVariance`, the situation a survey hits when both groups
//!   give identical scores.
//!
//! Downstream usage
//! ----------------
//! - `hypothesis::mean` reuses [`pooled_variance`] and
//!   [`welch_satterthwaite_df`] so tests and intervals can never drift
//!   apart on df or SE formulas.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the Welch df against the closed form for a
//!   reference case (n₁ = 5, s₁² = 4, n₂ = 8, s₂² = 9), verify the
//!   pooled interval on hand-computed data, and exercise the degenerate
//!   and undersized branches.

use crate::descriptive::summary::{mean, sample_variance};
use crate::distributions::quantiles::{normal_quantile, t_quantile};
use crate::errors::{StatError, StatResult};
use crate::intervals::result::IntervalResult;
use crate::validation::{validate_sample, validate_sigma, validate_unit_open};

/// Pooled sample variance under the equal-variance assumption:
/// sp² = ((n₁−1)s₁² + (n₂−1)s₂²) / (n₁ + n₂ − 2).
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   The two groups; each needs n ≥ 2 finite observations.
///
/// Returns
/// -------
/// `StatResult<f64>`
///   The pooled variance. A value of exactly 0.0 (both groups constant)
///   is returned as-is; interval and test constructors convert it into
///   `DegenerateVariance` because they need to divide by it.
pub fn pooled_variance(a: &[f64], b: &[f64]) -> StatResult<f64> {
    validate_sample(a, 2)?;
    validate_sample(b, 2)?;

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let (v1, v2) = (sample_variance(a)?, sample_variance(b)?);

    Ok(((n1 - 1.0) * v1 + (n2 - 1.0) * v2) / (n1 + n2 - 2.0))
}

/// Welch–Satterthwaite approximate degrees of freedom:
/// ν = (s₁²/n₁ + s₂²/n₂)² / [(s₁²/n₁)²/(n₁−1) + (s₂²/n₂)²/(n₂−1)].
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   The two groups; each needs n ≥ 2 finite observations.
///
/// Returns
/// -------
/// `StatResult<f64>`
///   The (generally fractional) df.
///
/// Errors
/// ------
/// - `StatError::DegenerateVariance`
///   When s₁²/n₁ + s₂²/n₂ is not strictly positive (both groups
///   constant), the ratio is 0/0 and no df exists.
pub fn welch_satterthwaite_df(a: &[f64], b: &[f64]) -> StatResult<f64> {
    validate_sample(a, 2)?;
    validate_sample(b, 2)?;

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let term1 = sample_variance(a)? / n1;
    let term2 = sample_variance(b)? / n2;
    let combined = term1 + term2;
    if combined <= 0.0 {
        return Err(StatError::DegenerateVariance { value: combined });
    }

    Ok(combined.powi(2) / (term1.powi(2) / (n1 - 1.0) + term2.powi(2) / (n2 - 1.0)))
}

/// Confidence interval for μ₁ − μ₂ with known population variances.
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   The two groups; each must be non-empty.
/// - `sigma_a`, `sigma_b`: `f64`
///   Known population standard deviations; each must be > 0.
/// - `confidence`: `f64`
///   Confidence level, strictly inside (0, 1).
///
/// Returns
/// -------
/// `StatResult<IntervalResult>`
///   (x̄₁ − x̄₂) ± z₁₋α/₂ · √(σ₁²/n₁ + σ₂²/n₂).
pub fn mean_difference_known_sigmas(
    a: &[f64], b: &[f64], sigma_a: f64, sigma_b: f64, confidence: f64,
) -> StatResult<IntervalResult> {
    validate_sample(a, 1)?;
    validate_sample(b, 1)?;
    validate_sigma("sigma_a", sigma_a)?;
    validate_sigma("sigma_b", sigma_b)?;
    validate_unit_open("confidence", confidence)?;

    let estimate = mean(a)? - mean(b)?;
    let se = (sigma_a.powi(2) / a.len() as f64 + sigma_b.powi(2) / b.len() as f64).sqrt();
    let z = normal_quantile(1.0 - (1.0 - confidence) / 2.0)?;

    Ok(IntervalResult::from_margin(estimate, z * se, confidence))
}

/// Confidence interval for μ₁ − μ₂ assuming equal variances (pooled t).
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   The two groups; each needs n ≥ 2.
/// - `confidence`: `f64`
///   Confidence level, strictly inside (0, 1).
///
/// Returns
/// -------
/// `StatResult<IntervalResult>`
///   (x̄₁ − x̄₂) ± t₁₋α/₂(n₁+n₂−2) · sp·√(1/n₁ + 1/n₂).
///
/// Errors
/// ------
/// - `StatError::DegenerateVariance` when sp² is not strictly positive.
pub fn mean_difference_pooled(a: &[f64], b: &[f64], confidence: f64) -> StatResult<IntervalResult> {
    validate_unit_open("confidence", confidence)?;

    let sp2 = pooled_variance(a, b)?;
    if sp2 <= 0.0 {
        return Err(StatError::DegenerateVariance { value: sp2 });
    }

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let estimate = mean(a)? - mean(b)?;
    let se = sp2.sqrt() * (1.0 / n1 + 1.0 / n2).sqrt();
    let df = n1 + n2 - 2.0;
    let t = t_quantile(1.0 - (1.0 - confidence) / 2.0, df)?;

    Ok(IntervalResult::from_margin(estimate, t * se, confidence))
}

/// Confidence interval for μ₁ − μ₂ without the equal-variance assumption
/// (Welch).
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   The two groups; each needs n ≥ 2.
/// - `confidence`: `f64`
///   Confidence level, strictly inside (0, 1).
///
/// Returns
/// -------
/// `StatResult<IntervalResult>`
///   (x̄₁ − x̄₂) ± t₁₋α/₂(ν) · √(s₁²/n₁ + s₂²/n₂) with ν from
///   [`welch_satterthwaite_df`].
///
/// Errors
/// ------
/// - `StatError::DegenerateVariance` when the combined variance is not
///   strictly positive.
pub fn mean_difference_welch(a: &[f64], b: &[f64], confidence: f64) -> StatResult<IntervalResult> {
    validate_unit_open("confidence", confidence)?;

    let df = welch_satterthwaite_df(a, b)?;
    let estimate = mean(a)? - mean(b)?;
    let se = (sample_variance(a)? / a.len() as f64 + sample_variance(b)? / b.len() as f64).sqrt();
    let t = t_quantile(1.0 - (1.0 - confidence) / 2.0, df)?;

    Ok(IntervalResult::from_margin(estimate, t * se, confidence))
}
