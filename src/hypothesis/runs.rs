//! hypothesis::runs — Wald–Wolfowitz runs test for randomness.
//!
//! Purpose
//! -------
//! Test whether a sequence of observations is randomly ordered by
//! dichotomizing around a reference value and counting runs of equal
//! signs. Too few runs suggests clustering; too many suggests
//! systematic alternation.
//!
//! Key behaviors
//! -------------
//! - Sign of an observation is `value >= reference`; values exactly on
//!   the reference count toward the upper group.
//! - Under randomness, R is asymptotically normal with
//!   E[R] = 1 + 2n₁n₂/n and Var[R] = 2n₁n₂(2n₁n₂ − n)/(n²(n − 1)).
//! - The p-value is two-sided against the standard normal.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both groups must be nonempty; a one-sided split has zero run
//!   variance and the statistic is undefined.
//!
//! Conventions
//! -----------
//! - `runs_test_around_median` is the common entry point: the sample
//!   median is the natural cut for ordinal survey responses.
//!
//! Testing notes
//! -------------
//! - Unit tests pin R, E[R] and the decision on a perfectly alternating
//!   sequence and exercise the degenerate one-group edge.

use crate::errors::{StatError, StatResult};
use crate::hypothesis::config::TestConfig;
use crate::hypothesis::result::{ReferenceDistribution, TestResult};
use crate::validation::{validate_sample, validate_unit_open};

/// Wald–Wolfowitz runs test around an explicit reference value.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sequence in observation order; n ≥ 2.
/// - `reference`: `f64`
///   Cut point for dichotomization; must be finite.
/// - `alpha`: `f64`
///   Significance level in (0, 1).
///
/// Returns
/// -------
/// `StatResult<TestResult>`
///   Z = (R − E[R])/√Var[R] against the standard normal, two-sided.
///
/// Errors
/// ------
/// - `StatError::InsufficientData` when n < 2.
/// - `StatError::InvalidParameter` for a non-finite reference or α.
/// - `StatError::DegenerateVariance` when every observation falls on
///   the same side of the reference.
pub fn runs_test(data: &[f64], reference: f64, alpha: f64) -> StatResult<TestResult> {
    validate_sample(data, 2)?;
    validate_unit_open("alpha", alpha)?;
    if !reference.is_finite() {
        return Err(StatError::InvalidParameter { name: "reference", value: reference });
    }

    let signs: Vec<bool> = data.iter().map(|&x| x >= reference).collect();
    let n1 = signs.iter().filter(|&&s| s).count() as f64;
    let n2 = signs.len() as f64 - n1;
    if n1 == 0.0 || n2 == 0.0 {
        return Err(StatError::DegenerateVariance { value: 0.0 });
    }

    let runs = 1 + signs.windows(2).filter(|w| w[0] != w[1]).count();
    let n = n1 + n2;
    let expected = 1.0 + 2.0 * n1 * n2 / n;
    let variance = 2.0 * n1 * n2 * (2.0 * n1 * n2 - n) / (n * n * (n - 1.0));
    if variance <= 0.0 {
        return Err(StatError::DegenerateVariance { value: variance });
    }

    let z = (runs as f64 - expected) / variance.sqrt();
    let config = TestConfig::two_sided(alpha, 0.0)?;
    TestResult::from_statistic(z, ReferenceDistribution::StandardNormal, &config)
}

/// Runs test dichotomized around the sample median.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sequence in observation order; n ≥ 2.
/// - `alpha`: `f64`
///   Significance level in (0, 1).
///
/// Returns
/// -------
/// `StatResult<TestResult>`
///   Same as [`runs_test`] with the sample median as the reference.
///
/// Errors
/// ------
/// - Everything [`runs_test`] returns; a constant sample degenerates to
///   a one-sided split and yields `DegenerateVariance`.
pub fn runs_test_around_median(data: &[f64], alpha: f64) -> StatResult<TestResult> {
    validate_sample(data, 2)?;
    let reference = crate::descriptive::summary::median(data)?;
    runs_test(data, reference, alpha)
}
