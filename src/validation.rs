//! validation — shared input guards for statistical primitives.
//!
//! Purpose
//! -------
//! Centralize basic input validation for all statistical routines in this
//! crate. This avoids duplicating checks on sample length, data finiteness,
//! and configuration values (α, confidence levels, degrees of freedom,
//! proportions) across the interval, hypothesis-test, and regression
//! modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on numeric samples before any statistic
//!   is computed.
//! - Map invalid inputs into structured `StatError` values for consistent
//!   error handling in Rust and at the Python boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Sample minimum sizes vary by statistic (1 for a mean, 2 for a
//!   variance, 3+ for regression); callers state the minimum they need.
//! - All data values must be finite (not `NaN`, not ±∞).
//! - Probabilities (α, confidence levels, quantile levels, hypothesized
//!   proportions) must lie strictly inside (0, 1).
//! - Degrees of freedom must be finite and strictly positive.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what is required for error construction.
//! - A successful return (`Ok(())`) is a guarantee that the stated shape
//!   and range constraints are satisfied; numeric degeneracies that only
//!   appear during computation (zero variance, singular matrices) are
//!   reported by the computing module instead.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_sample`] (and the scalar guards) at the top of every
//!   public entry point before computing sums or distribution quantiles.
//! - Paired procedures call [`validate_paired_samples`] to enforce equal
//!   lengths on top of per-sample constraints.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of each guard and
//!   a simple success path per guard.

use crate::errors::{StatError, StatResult};

/// Validate minimum length and finiteness for a single numeric sample.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Input sample of real-valued observations. Every value must be finite
///   (no `NaN` or ±∞).
/// - `min_len`: `usize`
///   Minimum number of observations the caller's statistic requires
///   (1 for a mean or median, 2 for a sample variance, and so on).
///
/// Returns
/// -------
/// `StatResult<()>`
///   - `Ok(())` if the sample has at least `min_len` finite observations.
///   - `Err(StatError)` otherwise.
///
/// Errors
/// ------
/// - `StatError::InsufficientData`
///   Returned when `data.len() < min_len`, with both sizes in the payload.
/// - `StatError::NonFiniteValue(value)`
///   Returned when any element of `data` is not finite, with `value` set
///   to the offending entry.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `StatError`.
pub fn validate_sample(data: &[f64], min_len: usize) -> StatResult<()> {
    if data.len() < min_len {
        return Err(StatError::InsufficientData { required: min_len, actual: data.len() });
    }

    for &value in data {
        if !value.is_finite() {
            return Err(StatError::NonFiniteValue(value));
        }
    }

    Ok(())
}

/// Validate two paired samples: equal lengths, each meeting `min_len`.
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   Paired observation sequences (e.g., before/after scores). Must have
///   identical lengths and contain only finite values.
/// - `min_len`: `usize`
///   Minimum number of pairs required by the calling procedure.
///
/// Returns
/// -------
/// `StatResult<()>`
///   `Ok(())` when both samples pass [`validate_sample`] and their lengths
///   match; the first violated constraint otherwise.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter`
///   Returned when `a.len() != b.len()`, with the second sample's length
///   as the payload.
/// - Any error from [`validate_sample`] applied to `a` or `b`.
pub fn validate_paired_samples(a: &[f64], b: &[f64], min_len: usize) -> StatResult<()> {
    validate_sample(a, min_len)?;
    validate_sample(b, min_len)?;

    if a.len() != b.len() {
        return Err(StatError::InvalidParameter {
            name: "paired sample length",
            value: b.len() as f64,
        });
    }

    Ok(())
}

/// Validate that a probability-like value lies strictly inside (0, 1).
///
/// Used for significance levels α, confidence levels, quantile levels,
/// and hypothesized population proportions.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter`
///   Returned when `value` is non-finite or outside the open unit
///   interval, carrying `name` so the message identifies the parameter.
pub fn validate_unit_open(name: &'static str, value: f64) -> StatResult<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(StatError::InvalidParameter { name, value });
    }
    Ok(())
}

/// Validate degrees of freedom: finite and strictly positive.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter`
///   Returned when `df` is non-finite or ≤ 0.
pub fn validate_df(df: f64) -> StatResult<()> {
    if !df.is_finite() || df <= 0.0 {
        return Err(StatError::InvalidParameter { name: "df", value: df });
    }
    Ok(())
}

/// Validate a population standard deviation: finite and strictly positive.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter`
///   Returned when `sigma` is non-finite or ≤ 0.
pub fn validate_sigma(name: &'static str, sigma: f64) -> StatResult<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(StatError::InvalidParameter { name, value: sigma });
    }
    Ok(())
}

/// Validate a success count against its trial count (`trials ≥ 1` and
/// `successes ≤ trials`).
///
/// Errors
/// ------
/// - `StatError::InsufficientData`
///   Returned when `trials == 0`.
/// - `StatError::InvalidParameter`
///   Returned when `successes > trials`, with the success count as the
///   payload.
pub fn validate_counts(successes: u64, trials: u64) -> StatResult<()> {
    if trials == 0 {
        return Err(StatError::InsufficientData { required: 1, actual: 0 });
    }
    if successes > trials {
        return Err(StatError::InvalidParameter { name: "successes", value: successes as f64 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of well-formed inputs for each guard.
    // - Each error branch:
    //   * insufficient sample length,
    //   * non-finite data value,
    //   * mismatched paired lengths,
    //   * out-of-range probability, df, sigma, and count values.
    //
    // They intentionally DO NOT cover:
    // - Numeric degeneracies that appear only during computation (zero
    //   variance, singular matrices); those are tested in the modules that
    //   detect them.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `validate_sample` succeeds on a finite sample that meets
    // the minimum length.
    //
    // Given
    // -----
    // - A finite sample of length 3 and min_len = 2.
    //
    // Expect
    // ------
    // - `validate_sample` returns `Ok(())`.
    fn validate_sample_valid_arguments_succeeds() {
        // Arrange
        let data = vec![0.1_f64, -0.2, 0.3];

        // Act
        let result = validate_sample(&data, 2);

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid inputs, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a sample below the requested minimum is rejected with
    // `StatError::InsufficientData` carrying both sizes.
    //
    // Given
    // -----
    // - A single-element sample and min_len = 2.
    //
    // Expect
    // ------
    // - `validate_sample` returns `Err(InsufficientData { 2, 1 })`.
    fn validate_sample_too_short_returns_insufficient_data() {
        // Arrange
        let data = vec![0.1_f64];

        // Act
        let result = validate_sample(&data, 2);

        // Assert
        match result {
            Err(StatError::InsufficientData { required, actual }) => {
                assert_eq!((required, actual), (2, 1));
            }
            other => panic!("expected InsufficientData error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that any non-finite value (e.g., NaN) in the sample triggers
    // `StatError::NonFiniteValue` with the offending payload.
    //
    // Given
    // -----
    // - A sample containing a `NaN`.
    //
    // Expect
    // ------
    // - `validate_sample` returns `Err(NonFiniteValue(value))`.
    fn validate_sample_non_finite_value_returns_non_finite_error() {
        // Arrange
        let data = vec![0.1_f64, f64::NAN, 0.3];

        // Act
        let result = validate_sample(&data, 1);

        // Assert
        match result {
            Err(StatError::NonFiniteValue(v)) => {
                assert!(!v.is_finite(), "payload should itself be non-finite. Got: {v}");
            }
            other => panic!("expected NonFiniteValue error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that paired samples with different lengths are rejected with
    // `StatError::InvalidParameter`.
    //
    // Given
    // -----
    // - Samples of lengths 3 and 2.
    //
    // Expect
    // ------
    // - `validate_paired_samples` returns `Err(InvalidParameter)`.
    fn validate_paired_samples_length_mismatch_returns_invalid_parameter() {
        // Arrange
        let a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![1.0_f64, 2.0];

        // Act
        let result = validate_paired_samples(&a, &b, 2);

        // Assert
        match result {
            Err(StatError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "paired sample length");
            }
            other => panic!("expected InvalidParameter error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `validate_unit_open` accepts interior values and rejects
    // the boundaries and anything beyond them.
    //
    // Given
    // -----
    // - Values 0.05 (valid), 0.0, 1.0, and 1.5 (all invalid).
    //
    // Expect
    // ------
    // - `Ok(())` for 0.05 and `Err(InvalidParameter)` for the rest.
    fn validate_unit_open_rejects_boundaries() {
        // Arrange & Act & Assert
        assert!(validate_unit_open("alpha", 0.05).is_ok());
        for bad in [0.0_f64, 1.0, 1.5, f64::NAN] {
            let result = validate_unit_open("alpha", bad);
            assert!(result.is_err(), "expected error for alpha = {bad}, got {result:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that non-positive or non-finite degrees of freedom are
    // rejected with `StatError::InvalidParameter`.
    //
    // Given
    // -----
    // - df values 2.0 (valid), 0.0, -1.0, and ∞ (invalid).
    //
    // Expect
    // ------
    // - `Ok(())` for 2.0 and `Err(InvalidParameter)` for the rest.
    fn validate_df_rejects_non_positive_and_non_finite() {
        // Arrange & Act & Assert
        assert!(validate_df(2.0).is_ok());
        for bad in [0.0_f64, -1.0, f64::INFINITY] {
            let result = validate_df(bad);
            assert!(result.is_err(), "expected error for df = {bad}, got {result:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify count validation: zero trials is insufficient data, and
    // successes beyond trials is an invalid parameter.
    //
    // Given
    // -----
    // - (3, 10) valid; (0 trials) and (11 successes of 10) invalid.
    //
    // Expect
    // ------
    // - `Ok(())`, `Err(InsufficientData)`, `Err(InvalidParameter)`.
    fn validate_counts_covers_both_error_branches() {
        // Arrange & Act & Assert
        assert!(validate_counts(3, 10).is_ok());

        match validate_counts(0, 0) {
            Err(StatError::InsufficientData { .. }) => (),
            other => panic!("expected InsufficientData error, got {other:?}"),
        }

        match validate_counts(11, 10) {
            Err(StatError::InvalidParameter { name, .. }) => assert_eq!(name, "successes"),
            other => panic!("expected InvalidParameter error, got {other:?}"),
        }
    }
}
