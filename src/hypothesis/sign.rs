//! hypothesis::sign — paired-sample sign test.
//!
//! Purpose
//! -------
//! Nonparametric test for a median difference between paired samples.
//! Only the sign of each within-pair difference is used, so no
//! distributional assumption is made beyond independence of pairs.
//!
//! Key behaviors
//! -------------
//! - Zero differences (ties) are discarded before counting.
//! - Statistic r = min(n⁺, n⁻) over the effective pairs.
//! - Exact two-sided p-value 2·P(X ≤ r) under Binomial(n_eff, ½) for
//!   n_eff ≤ 25; continuity-corrected normal approximation above that.
//! - All ties (n_eff = 0) yields p = 1.0: the data carry no sign
//!   information, so the null is never rejected.
//!
//! Conventions
//! -----------
//! - The test is always two-sided; the hypothesized median difference
//!   is 0, so no `TestConfig` is taken, only α.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the exact binomial p-value on a small hand case,
//!   the all-ties edge, and the tie-discarding rule.

use statrs::distribution::{Binomial, DiscreteCDF};

use crate::distributions::quantiles::normal_cdf;
use crate::errors::StatResult;
use crate::hypothesis::result::{ReferenceDistribution, TestResult};
use crate::validation::{validate_paired_samples, validate_unit_open};

/// Largest effective sample size for which the exact binomial p-value is
/// used; beyond this the normal approximation is accurate and avoids
/// summing long binomial tails.
const EXACT_LIMIT: u64 = 25;

/// Paired-sample sign test for a zero median difference.
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   Paired samples of equal length with at least one pair.
/// - `alpha`: `f64`
///   Significance level in (0, 1).
///
/// Returns
/// -------
/// `StatResult<TestResult>`
///   Statistic r = min(n⁺, n⁻); reference distribution is
///   Binomial(n_eff, ½) in the exact regime and standard normal in the
///   approximate regime.
///
/// Errors
/// ------
/// - `StatError::InsufficientData` when fewer than one pair is given.
/// - `StatError::InvalidParameter` on mismatched lengths or α ∉ (0, 1).
///
/// Notes
/// -----
/// - With every difference zero the p-value is 1.0 and the statistic is
///   reported as 0 over 0 trials.
pub fn sign_test(a: &[f64], b: &[f64], alpha: f64) -> StatResult<TestResult> {
    validate_paired_samples(a, b, 1)?;
    validate_unit_open("alpha", alpha)?;

    let mut plus = 0_u64;
    let mut minus = 0_u64;
    for (&x, &y) in a.iter().zip(b) {
        let diff = x - y;
        if diff > 0.0 {
            plus += 1;
        } else if diff < 0.0 {
            minus += 1;
        }
    }

    let n_eff = plus + minus;
    let r = plus.min(minus);

    if n_eff == 0 {
        // No sign information at all: never reject.
        return Ok(TestResult::from_p_value(
            0.0,
            ReferenceDistribution::Binomial { trials: 0 },
            alpha,
            1.0,
        ));
    }

    if n_eff <= EXACT_LIMIT {
        let null = Binomial::new(0.5, n_eff)
            .expect("p = 0.5 with positive trials is always a valid binomial");
        let p_value = (2.0 * null.cdf(r)).min(1.0);
        return Ok(TestResult::from_p_value(
            r as f64,
            ReferenceDistribution::Binomial { trials: n_eff },
            alpha,
            p_value,
        ));
    }

    // Continuity-corrected normal approximation to Binomial(n, ½).
    let n = n_eff as f64;
    let z = (r as f64 + 0.5 - n / 2.0) / (n / 4.0).sqrt();
    let p_value = (2.0 * normal_cdf(z)).min(1.0);
    Ok(TestResult::from_p_value(z, ReferenceDistribution::StandardNormal, alpha, p_value))
}
