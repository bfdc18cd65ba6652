//! hypothesis::proportion — z tests for proportions.
//!
//! Purpose
//! -------
//! Implement the one-sample and two-sample z tests for population
//! proportions from success/trial counts, matching the dashboard's
//! "share of satisfied visitors" questions.
//!
//! Key behaviors
//! -------------
//! - One sample: Z = (p̂ − π₀) / √(π₀(1−π₀)/n). The standard error uses
//!   the *hypothesized* π₀, as the textbook does — unlike the matching
//!   confidence interval, which has no π₀ and uses p̂.
//! - Two samples: Z = ((p̂₁ − p̂₂) − δ₀) / √(p̂₁q̂₁/n₁ + p̂₂q̂₂/n₂) with
//!   the unpooled standard error, matching the interval in
//!   `intervals::proportion`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Counts are exact; trials ≥ 1 per group, successes ≤ trials.
//! - π₀ must lie strictly inside (0, 1) so its standard error is
//!   positive.
//! - The normal approximation is the caller's modeling judgment; no
//!   np ≥ 5 rule is enforced here.
//!
//! Testing notes
//! -------------
//! - Unit tests pin both statistics on hand-computed counts and exercise
//!   the π₀ range guard.

use crate::errors::{StatError, StatResult};
use crate::hypothesis::config::TestConfig;
use crate::hypothesis::result::{ReferenceDistribution, TestResult};
use crate::validation::validate_counts;

/// One-sample z test for a proportion.
///
/// Parameters
/// ----------
/// - `successes`, `trials`: `u64`
///   Observed counts; trials ≥ 1 and successes ≤ trials.
/// - `config`: `&TestConfig`
///   α, tail mode, and the hypothesized proportion π₀ ∈ (0, 1).
///
/// Returns
/// -------
/// `StatResult<TestResult>`
///   Z = (p̂ − π₀) / √(π₀(1−π₀)/n) against the standard normal.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter` when π₀ is outside (0, 1) (a boundary
///   π₀ gives a zero standard error) or the counts are inconsistent.
pub fn proportion_z_test(successes: u64, trials: u64, config: &TestConfig) -> StatResult<TestResult> {
    validate_counts(successes, trials)?;

    let pi0 = config.hypothesized();
    if !(0.0..=1.0).contains(&pi0) || pi0 == 0.0 || pi0 == 1.0 {
        return Err(StatError::InvalidParameter { name: "hypothesized proportion", value: pi0 });
    }

    let n = trials as f64;
    let p_hat = successes as f64 / n;
    let se = (pi0 * (1.0 - pi0) / n).sqrt();
    let statistic = (p_hat - pi0) / se;

    TestResult::from_statistic(statistic, ReferenceDistribution::StandardNormal, config)
}

/// Two-sample z test for a difference of proportions (unpooled SE).
///
/// The hypothesized value in `config` is the difference π₁ − π₂ under
/// H₀ (0 for "no difference").
///
/// Errors
/// ------
/// - `StatError::DegenerateVariance` when both sample proportions are at
///   a boundary (0 or 1), so the unpooled standard error is zero.
pub fn proportion_difference_z_test(
    successes_a: u64, trials_a: u64, successes_b: u64, trials_b: u64, config: &TestConfig,
) -> StatResult<TestResult> {
    validate_counts(successes_a, trials_a)?;
    validate_counts(successes_b, trials_b)?;

    let (n1, n2) = (trials_a as f64, trials_b as f64);
    let p1 = successes_a as f64 / n1;
    let p2 = successes_b as f64 / n2;

    let variance = p1 * (1.0 - p1) / n1 + p2 * (1.0 - p2) / n2;
    if variance <= 0.0 {
        return Err(StatError::DegenerateVariance { value: variance });
    }

    let statistic = (p1 - p2 - config.hypothesized()) / variance.sqrt();

    TestResult::from_statistic(statistic, ReferenceDistribution::StandardNormal, config)
}
