//! intervals::variance — chi-square confidence interval for a variance.
//!
//! Purpose
//! -------
//! Construct the classical chi-square interval for a population variance:
//! ((n−1)s²/χ²₁₋α/₂, (n−1)s²/χ²α/₂). The interval is asymmetric around
//! s², so the result records the half-width as its margin of error.
//!
//! Key behaviors
//! -------------
//! - Uses the two chi-square quantiles at α/2 and 1 − α/2 with
//!   df = n − 1.
//! - The larger quantile produces the lower bound; the constructor keeps
//!   the bounds ordered.
//!
//! Invariants & assumptions
//! ------------------------
//! - Needs n ≥ 2 finite observations so s² exists.
//! - A constant sample (s² = 0) collapses every bound to zero, which is
//!   not a usable variance statement; it is reported as
//!   `DegenerateVariance`.
//!
//! Downstream usage
//! ----------------
//! - `hypothesis::variance` is the test-side mirror, using the same
//!   (n−1)s²/σ₀² pivot.
//!
//! Testing notes
//! -------------
//! - Unit tests pin a hand-computed interval, check bound ordering, and
//!   exercise the degenerate branch.

use crate::descriptive::summary::sample_variance;
use crate::distributions::quantiles::chi_square_quantile;
use crate::errors::{StatError, StatResult};
use crate::intervals::result::IntervalResult;
use crate::validation::{validate_sample, validate_unit_open};

/// Chi-square confidence interval for a population variance.
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
///   Point estimate s², bounds ((n−1)s²/χ²₁₋α/₂(n−1),
///   (n−1)s²/χ²α/₂(n−1)).
///
/// Errors
/// ------
/// - `StatError::InsufficientData` when n < 2.
/// - `StatError::DegenerateVariance` when s² = 0.
/// - `StatError::InvalidParameter` for an out-of-range confidence level.
pub fn variance(data: &[f64], confidence: f64) -> StatResult<IntervalResult> {
    validate_sample(data, 2)?;
    validate_unit_open("confidence", confidence)?;

    let s2 = sample_variance(data)?;
    if s2 <= 0.0 {
        return Err(StatError::DegenerateVariance { value: s2 });
    }

    let df = (data.len() - 1) as f64;
    let alpha = 1.0 - confidence;
    let chi_upper = chi_square_quantile(1.0 - alpha / 2.0, df)?;
    let chi_lower = chi_square_quantile(alpha / 2.0, df)?;

    let lower = df * s2 / chi_upper;
    let upper = df * s2 / chi_lower;

    Ok(IntervalResult::from_bounds(s2, lower, upper, confidence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A hand-computed chi-square interval.
    // - Bound ordering and containment of s².
    // - The degenerate branch for a constant sample.
    //
    // They intentionally DO NOT cover:
    // - Chi-square quantile accuracy itself, tested in `distributions`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the variance interval against quantile-table values.
    //
    // Given
    // -----
    // - A sample of n = 10 with s² computed in the test, at 95%
    //   confidence, so df = 9, χ²₀.₀₂₅(9) ≈ 2.700, χ²₀.₉₇₅(9) ≈ 19.023.
    //
    // Expect
    // ------
    // - Bounds 9s²/19.023 and 9s²/2.700 within 1e-2 relative.
    fn variance_interval_matches_table_quantiles() {
        // Arrange
        let data = vec![4.0_f64, 5.0, 6.0, 7.0, 3.0, 5.0, 6.0, 4.0, 5.0, 7.0];
        let s2 = sample_variance(&data).expect("variance should compute");

        // Act
        let interval = variance(&data, 0.95).expect("interval should compute");

        // Assert
        let expected_lower = 9.0 * s2 / 19.023;
        let expected_upper = 9.0 * s2 / 2.700;
        assert!(
            (interval.lower() - expected_lower).abs() / expected_lower < 1e-2,
            "expected lower ≈ {expected_lower}, got {}",
            interval.lower()
        );
        assert!(
            (interval.upper() - expected_upper).abs() / expected_upper < 1e-2,
            "expected upper ≈ {expected_upper}, got {}",
            interval.upper()
        );
        assert!(interval.lower() < s2 && s2 < interval.upper(), "s² should lie inside");
    }

    #[test]
    // Purpose
    // -------
    // Ensure a constant sample is reported as degenerate rather than
    // producing a zero-width interval.
    //
    // Given
    // -----
    // - Five identical observations.
    //
    // Expect
    // ------
    // - `Err(StatError::DegenerateVariance)` with value 0.0.
    fn variance_interval_constant_sample_returns_degenerate_variance() {
        // Arrange
        let data = vec![3.0_f64; 5];

        // Act
        let result = variance(&data, 0.95);

        // Assert
        match result {
            Err(StatError::DegenerateVariance { value }) => assert_eq!(value, 0.0),
            other => panic!("expected DegenerateVariance error, got {other:?}"),
        }
    }
}
