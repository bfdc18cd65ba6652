//! hypothesis::mean — z and t tests for means.
//!
//! Purpose
//! -------
//! Implement the parametric tests for one mean and for a difference of
//! means, mirroring the intervals in `intervals::{mean, two_sample}`:
//! z when population variances are known, t with df = n − 1 for one mean
//! with estimated σ, pooled t with df = n₁ + n₂ − 2, and Welch t with
//! the Welch–Satterthwaite df.
//!
//! Key behaviors
//! -------------
//! - Every statistic is (estimate − hypothesized) / SE with the same
//!   standard-error expressions the intervals use; the two-sided reject
//!   decision is therefore equivalent to the hypothesized value falling
//!   outside the matching confidence interval at level 1 − α.
//! - Two-sample tests reuse [`pooled_variance`] and
//!   [`welch_satterthwaite_df`] so df and SE can never drift from the
//!   interval side.
//!
//! Invariants & assumptions
//! ------------------------
//! - Known-σ tests need each sample non-empty and σ > 0;
//!   variance-estimating tests need n ≥ 2 per sample.
//! - `config.hypothesized()` is μ₀ for one-sample tests and the
//!   hypothesized difference (0 in the dashboard) for two-sample tests.
//!
//! Downstream usage
//! ----------------
//! - The dashboard's hypothesis-test pages call these with the
//!   satisfaction / visit-frequency columns split by gender or age
//!   group.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the one-sample statistics on hand-computed data,
//!   assert the CI/test round-trip equivalence for both one-sample
//!   variants, and verify the Welch test reports its Welch df (not the
//!   pooled one).

use crate::descriptive::summary::{mean, sample_std, sample_variance};
use crate::errors::{StatError, StatResult};
use crate::hypothesis::config::TestConfig;
use crate::hypothesis::result::{ReferenceDistribution, TestResult};
use crate::intervals::two_sample::{pooled_variance, welch_satterthwaite_df};
use crate::validation::{validate_sample, validate_sigma};

/// One-sample z test for a mean with known population σ.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; n ≥ 1.
/// - `sigma`: `f64`
///   Known population standard deviation; must be > 0.
/// - `config`: `&TestConfig`
///   α, tail mode, and μ₀.
///
/// Returns
/// -------
/// `StatResult<TestResult>`
///   Z = (x̄ − μ₀) / (σ/√n) against the standard normal.
pub fn mean_z_test(data: &[f64], sigma: f64, config: &TestConfig) -> StatResult<TestResult> {
    validate_sample(data, 1)?;
    validate_sigma("sigma", sigma)?;

    let se = sigma / (data.len() as f64).sqrt();
    let statistic = (mean(data)? - config.hypothesized()) / se;

    TestResult::from_statistic(statistic, ReferenceDistribution::StandardNormal, config)
}

/// One-sample t test for a mean with σ estimated from the sample.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; n ≥ 2.
/// - `config`: `&TestConfig`
///   α, tail mode, and μ₀.
///
/// Returns
/// -------
/// `StatResult<TestResult>`
///   t = (x̄ − μ₀) / (s/√n) against Student-t with df = n − 1.
///
/// Errors
/// ------
/// - `StatError::DegenerateVariance` when s = 0 (constant sample): the
///   statistic has no finite value.
pub fn mean_t_test(data: &[f64], config: &TestConfig) -> StatResult<TestResult> {
    validate_sample(data, 2)?;

    let s = sample_std(data)?;
    if s <= 0.0 {
        return Err(StatError::DegenerateVariance { value: s });
    }

    let se = s / (data.len() as f64).sqrt();
    let statistic = (mean(data)? - config.hypothesized()) / se;
    let df = (data.len() - 1) as f64;

    TestResult::from_statistic(statistic, ReferenceDistribution::StudentT { df }, config)
}

/// Two-sample z test for a difference of means with known population
/// variances.
///
/// The hypothesized value in `config` is the difference μ₁ − μ₂ under
/// H₀ (0 for "no difference").
pub fn mean_difference_z_test(
    a: &[f64], b: &[f64], sigma_a: f64, sigma_b: f64, config: &TestConfig,
) -> StatResult<TestResult> {
    validate_sample(a, 1)?;
    validate_sample(b, 1)?;
    validate_sigma("sigma_a", sigma_a)?;
    validate_sigma("sigma_b", sigma_b)?;

    let se = (sigma_a.powi(2) / a.len() as f64 + sigma_b.powi(2) / b.len() as f64).sqrt();
    let statistic = (mean(a)? - mean(b)? - config.hypothesized()) / se;

    TestResult::from_statistic(statistic, ReferenceDistribution::StandardNormal, config)
}

/// Two-sample pooled t test (equal variances assumed).
///
/// df = n₁ + n₂ − 2; SE = sp·√(1/n₁ + 1/n₂).
///
/// Errors
/// ------
/// - `StatError::DegenerateVariance` when the pooled variance is not
///   strictly positive (both groups constant).
pub fn mean_difference_pooled_test(
    a: &[f64], b: &[f64], config: &TestConfig,
) -> StatResult<TestResult> {
    let sp2 = pooled_variance(a, b)?;
    if sp2 <= 0.0 {
        return Err(StatError::DegenerateVariance { value: sp2 });
    }

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let se = sp2.sqrt() * (1.0 / n1 + 1.0 / n2).sqrt();
    let statistic = (mean(a)? - mean(b)? - config.hypothesized()) / se;
    let df = n1 + n2 - 2.0;

    TestResult::from_statistic(statistic, ReferenceDistribution::StudentT { df }, config)
}

/// Two-sample Welch t test (unequal variances).
///
/// SE = √(s₁²/n₁ + s₂²/n₂); df from the Welch–Satterthwaite
/// approximation, reported (fractionally) in the result's distribution.
///
/// Errors
/// ------
/// - `StatError::DegenerateVariance` when the combined variance is not
///   strictly positive.
pub fn mean_difference_welch_test(
    a: &[f64], b: &[f64], config: &TestConfig,
) -> StatResult<TestResult> {
    let df = welch_satterthwaite_df(a, b)?;

    let se = (sample_variance(a)? / a.len() as f64 + sample_variance(b)? / b.len() as f64).sqrt();
    let statistic = (mean(a)? - mean(b)? - config.hypothesized()) / se;

    TestResult::from_statistic(statistic, ReferenceDistribution::StudentT { df }, config)
}
