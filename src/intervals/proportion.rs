//! intervals::proportion — confidence intervals for proportions.
//!
//! Purpose
//! -------
//! Construct the Wald confidence intervals for a single population
//! proportion and for a difference of two proportions, from success and
//! trial counts. These are the intervals the dashboard builds for
//! "share of satisfied visitors" style questions.
//!
//! Key behaviors
//! -------------
//! - Single proportion: p̂ ± z₁₋α/₂ · √(p̂(1−p̂)/n), bounds clipped to
//!   [0, 1].
//! - Difference: (p̂₁ − p̂₂) ± z₁₋α/₂ · √(p̂₁q̂₁/n₁ + p̂₂q̂₂/n₂) with the
//!   unpooled standard error, bounds clipped to [−1, 1].
//!
//! Invariants & assumptions
//! ------------------------
//! - Counts are exact (`u64`); each trial count must be ≥ 1 and successes
//!   cannot exceed trials.
//! - Degenerate p̂ ∈ {0, 1} is allowed: the standard error collapses to 0
//!   and the interval collapses onto the estimate, which is what the Wald
//!   construction honestly reports there.
//!
//! Downstream usage
//! ----------------
//! - `hypothesis::proportion` mirrors these with z tests; note the
//!   one-sample *test* uses the hypothesized π₀ in its standard error
//!   while this interval uses p̂, as the textbook (and the original
//!   dashboard) do.
//!
//! Testing notes
//! -------------
//! - Unit tests pin a hand-computed interval, verify clipping near the
//!   boundary, and exercise the count guards.

use crate::distributions::quantiles::normal_quantile;
use crate::errors::StatResult;
use crate::intervals::result::IntervalResult;
use crate::validation::{validate_counts, validate_unit_open};

/// Wald confidence interval for a population proportion.
///
/// Parameters
/// ----------
/// - `successes`: `u64`
///   Number of observations with the attribute of interest.
/// - `trials`: `u64`
///   Sample size; must be ≥ 1 and ≥ `successes`.
/// - `confidence`: `f64`
///   Confidence level, strictly inside (0, 1).
///
/// Returns
/// -------
/// `StatResult<IntervalResult>`
///   p̂ ± z₁₋α/₂·√(p̂(1−p̂)/n), clipped to [0, 1].
///
/// Errors
/// ------
/// - `StatError::InsufficientData` when `trials == 0`.
/// - `StatError::InvalidParameter` when `successes > trials` or the
///   confidence level is out of range.
pub fn proportion(successes: u64, trials: u64, confidence: f64) -> StatResult<IntervalResult> {
    validate_counts(successes, trials)?;
    validate_unit_open("confidence", confidence)?;

    let n = trials as f64;
    let p_hat = successes as f64 / n;
    let se = (p_hat * (1.0 - p_hat) / n).sqrt();
    let z = normal_quantile(1.0 - (1.0 - confidence) / 2.0)?;

    Ok(IntervalResult::from_margin_clipped(p_hat, z * se, confidence, 0.0, 1.0))
}

/// Wald confidence interval for a difference of two proportions
/// (unpooled standard error).
///
/// Parameters
/// ----------
/// - `successes_a`, `trials_a`: `u64`
///   Counts for the first group.
/// - `successes_b`, `trials_b`: `u64`
///   Counts for the second group.
/// - `confidence`: `f64`
///   Confidence level, strictly inside (0, 1).
///
/// Returns
/// -------
/// `StatResult<IntervalResult>`
///   (p̂₁ − p̂₂) ± z₁₋α/₂·√(p̂₁q̂₁/n₁ + p̂₂q̂₂/n₂), clipped to [−1, 1].
///
/// Errors
/// ------
/// Same guards as [`proportion`] applied per group.
pub fn proportion_difference(
    successes_a: u64, trials_a: u64, successes_b: u64, trials_b: u64, confidence: f64,
) -> StatResult<IntervalResult> {
    validate_counts(successes_a, trials_a)?;
    validate_counts(successes_b, trials_b)?;
    validate_unit_open("confidence", confidence)?;

    let (n1, n2) = (trials_a as f64, trials_b as f64);
    let p1 = successes_a as f64 / n1;
    let p2 = successes_b as f64 / n2;
    let se = (p1 * (1.0 - p1) / n1 + p2 * (1.0 - p2) / n2).sqrt();
    let z = normal_quantile(1.0 - (1.0 - confidence) / 2.0)?;

    Ok(IntervalResult::from_margin_clipped(p1 - p2, z * se, confidence, -1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A hand-computed single-proportion interval.
    // - Clipping of the upper bound for p̂ near 1.
    // - The two-proportion interval's point estimate and symmetry.
    // - Count validation branches.
    //
    // They intentionally DO NOT cover:
    // - Coverage properties of the Wald interval (known to be approximate
    //   for small n); this crate implements the textbook construction.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the single-proportion interval on hand-computed values.
    //
    // Given
    // -----
    // - 18 successes of 30 trials at 95% confidence: p̂ = 0.6,
    //   SE = √(0.6·0.4/30) ≈ 0.089443.
    //
    // Expect
    // ------
    // - Margin ≈ 1.95996 · 0.089443 ≈ 0.17530.
    fn proportion_interval_matches_hand_computation() {
        // Arrange & Act
        let interval = proportion(18, 30, 0.95).expect("interval should compute");

        // Assert
        assert!((interval.point_estimate() - 0.6).abs() < 1e-12);
        assert!(
            (interval.margin_of_error() - 0.17530).abs() < 1e-4,
            "expected margin ≈ 0.17530, got {}",
            interval.margin_of_error()
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that an extreme p̂ clips at the natural boundary instead of
    // reporting an upper bound above 1.
    //
    // Given
    // -----
    // - 29 successes of 30 trials at 99% confidence.
    //
    // Expect
    // ------
    // - Upper bound exactly 1.0; lower bound strictly below p̂.
    fn proportion_interval_clips_at_one() {
        // Arrange & Act
        let interval = proportion(29, 30, 0.99).expect("interval should compute");

        // Assert
        assert_eq!(interval.upper(), 1.0, "upper bound should clip to 1.0");
        assert!(interval.lower() < interval.point_estimate());
    }

    #[test]
    // Purpose
    // -------
    // Verify the two-proportion interval centers on p̂₁ − p̂₂ and is
    // antisymmetric under swapping the groups.
    //
    // Given
    // -----
    // - Groups (12 of 16) and (9 of 14).
    //
    // Expect
    // ------
    // - Point estimate 12/16 − 9/14; swapping groups negates the bounds.
    fn proportion_difference_is_antisymmetric() {
        // Arrange & Act
        let ab = proportion_difference(12, 16, 9, 14, 0.95).expect("interval should compute");
        let ba = proportion_difference(9, 14, 12, 16, 0.95).expect("interval should compute");

        // Assert
        let expected = 12.0 / 16.0 - 9.0 / 14.0;
        assert!((ab.point_estimate() - expected).abs() < 1e-12);
        assert!((ab.lower() + ba.upper()).abs() < 1e-12);
        assert!((ab.upper() + ba.lower()).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure count validation fires: zero trials and successes beyond
    // trials are both rejected.
    //
    // Given
    // -----
    // - (0 trials) and (31 successes of 30).
    //
    // Expect
    // ------
    // - `InsufficientData` and `InvalidParameter` respectively.
    fn proportion_interval_rejects_bad_counts() {
        // Arrange & Act & Assert
        match proportion(0, 0, 0.95) {
            Err(StatError::InsufficientData { .. }) => (),
            other => panic!("expected InsufficientData error, got {other:?}"),
        }
        match proportion(31, 30, 0.95) {
            Err(StatError::InvalidParameter { name, .. }) => assert_eq!(name, "successes"),
            other => panic!("expected InvalidParameter error, got {other:?}"),
        }
    }
}
