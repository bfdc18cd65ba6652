//! distributions::quantiles — critical values and CDFs of the reference
//! distributions.
//!
//! Purpose
//! -------
//! Wrap the `statrs` Normal, Student-t, and chi-square distributions behind
//! small validated functions returning quantiles (critical values) and
//! CDFs. Every interval constructor and hypothesis test in this crate gets
//! its critical values and p-values through this module, so parameter
//! validation for `p` and `df` lives in exactly one place.
//!
//! Key behaviors
//! -------------
//! - `…_quantile(p, …)` returns the x with P(X ≤ x) = p for the
//!   respective distribution.
//! - `…_cdf(x, …)` returns P(X ≤ x), used for p-value derivation.
//! - Two-sided procedures ask for p = 1 − α/2; one-sided for p = 1 − α.
//!
//! Invariants & assumptions
//! ------------------------
//! - Quantile levels must lie strictly inside (0, 1); degrees of freedom
//!   must be finite and strictly positive. Violations surface as
//!   `StatError::InvalidParameter`, never as a panic.
//! - The standard normal uses location 0 and scale 1; the Student-t is the
//!   central t with the given df.
//!
//! Conventions
//! -----------
//! - Distribution constructors are infallible after validation, so the
//!   `statrs` builder results are unwrapped with `expect` and a note of
//!   the guarded precondition.
//!
//! Downstream usage
//! ----------------
//! - `intervals::*` calls the quantile functions for critical values.
//! - `hypothesis::result` calls the CDF functions when turning a statistic
//!   and tail mode into a p-value.
//!
//! Testing notes
//! -------------
//! - Unit tests pin well-known table values (z₀.₉₇₅ ≈ 1.95996,
//!   t₀.₉₇₅(10) ≈ 2.22814, χ²₀.₉₅(10) ≈ 18.307), check the
//!   quantile/CDF round trip, and exercise the invalid-parameter branches.

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

use crate::errors::StatResult;
use crate::validation::{validate_df, validate_unit_open};

/// Standard-normal quantile: the z with Φ(z) = p.
///
/// Parameters
/// ----------
/// - `p`: `f64`
///   Quantile level, strictly inside (0, 1). Two-sided intervals pass
///   `1 − α/2`, one-sided `1 − α`.
///
/// Returns
/// -------
/// `StatResult<f64>`
///   The quantile, or `StatError::InvalidParameter` for an out-of-range
///   `p`.
pub fn normal_quantile(p: f64) -> StatResult<f64> {
    validate_unit_open("p", p)?;
    Ok(Normal::new(0.0, 1.0).expect("unit normal is always valid").inverse_cdf(p))
}

/// Student-t quantile with `df` degrees of freedom.
///
/// Parameters
/// ----------
/// - `p`: `f64`
///   Quantile level, strictly inside (0, 1).
/// - `df`: `f64`
///   Degrees of freedom; must be finite and > 0. Fractional df are valid
///   (the Welch–Satterthwaite approximation produces them).
///
/// Returns
/// -------
/// `StatResult<f64>`
///   The quantile, or `StatError::InvalidParameter` when `p` or `df` is
///   out of range.
pub fn t_quantile(p: f64, df: f64) -> StatResult<f64> {
    validate_unit_open("p", p)?;
    validate_df(df)?;
    Ok(StudentsT::new(0.0, 1.0, df).expect("df validated positive").inverse_cdf(p))
}

/// Chi-square quantile with `df` degrees of freedom.
///
/// Same parameter constraints as [`t_quantile`].
pub fn chi_square_quantile(p: f64, df: f64) -> StatResult<f64> {
    validate_unit_open("p", p)?;
    validate_df(df)?;
    Ok(ChiSquared::new(df).expect("df validated positive").inverse_cdf(p))
}

/// Standard-normal CDF Φ(x).
pub fn normal_cdf(x: f64) -> f64 {
    Normal::new(0.0, 1.0).expect("unit normal is always valid").cdf(x)
}

/// Student-t CDF with `df` degrees of freedom.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter` when `df` is non-finite or ≤ 0.
pub fn t_cdf(x: f64, df: f64) -> StatResult<f64> {
    validate_df(df)?;
    Ok(StudentsT::new(0.0, 1.0, df).expect("df validated positive").cdf(x))
}

/// Chi-square CDF with `df` degrees of freedom.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter` when `df` is non-finite or ≤ 0.
pub fn chi_square_cdf(x: f64, df: f64) -> StatResult<f64> {
    validate_df(df)?;
    Ok(ChiSquared::new(df).expect("df validated positive").cdf(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of each quantile function with standard table values.
    // - The quantile/CDF round trip for all three distributions.
    // - Invalid-parameter branches for p and df.
    //
    // They intentionally DO NOT cover:
    // - Accuracy of the underlying statrs implementations beyond the
    //   pinned table values; that is statrs's own test surface.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the three quantile functions to well-known critical values.
    //
    // Given
    // -----
    // - p = 0.975 for the normal; p = 0.975, df = 10 for the t;
    //   p = 0.95, df = 10 for the chi-square.
    //
    // Expect
    // ------
    // - z ≈ 1.95996, t ≈ 2.22814, χ² ≈ 18.307 within 1e-3.
    fn quantiles_match_standard_tables() {
        // Arrange & Act
        let z = normal_quantile(0.975).expect("normal quantile");
        let t = t_quantile(0.975, 10.0).expect("t quantile");
        let chi = chi_square_quantile(0.95, 10.0).expect("chi-square quantile");

        // Assert
        assert!((z - 1.95996).abs() < 1e-3, "z_0.975 should be ≈1.95996, got {z}");
        assert!((t - 2.22814).abs() < 1e-3, "t_0.975(10) should be ≈2.22814, got {t}");
        assert!((chi - 18.307).abs() < 1e-2, "chi2_0.95(10) should be ≈18.307, got {chi}");
    }

    #[test]
    // Purpose
    // -------
    // Check the quantile/CDF round trip: CDF(quantile(p)) = p for each
    // distribution.
    //
    // Given
    // -----
    // - p = 0.9 and df = 7 where applicable.
    //
    // Expect
    // ------
    // - Each round trip recovers p within 1e-9.
    fn quantile_cdf_round_trip_recovers_level() {
        // Arrange
        let p = 0.9_f64;
        let df = 7.0_f64;

        // Act
        let z_rt = normal_cdf(normal_quantile(p).expect("normal quantile"));
        let t_rt = t_cdf(t_quantile(p, df).expect("t quantile"), df).expect("t cdf");
        let chi_rt = chi_square_cdf(chi_square_quantile(p, df).expect("chi quantile"), df)
            .expect("chi cdf");

        // Assert
        assert!((z_rt - p).abs() < 1e-9, "normal round trip should recover p, got {z_rt}");
        assert!((t_rt - p).abs() < 1e-9, "t round trip should recover p, got {t_rt}");
        assert!((chi_rt - p).abs() < 1e-9, "chi-square round trip should recover p, got {chi_rt}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that out-of-range quantile levels and degrees of freedom are
    // rejected as `InvalidParameter` rather than panicking.
    //
    // Given
    // -----
    // - p ∈ {0.0, 1.0} and df ∈ {0.0, -2.0}.
    //
    // Expect
    // ------
    // - Every call returns `Err(StatError::InvalidParameter)`.
    fn quantiles_reject_out_of_range_arguments() {
        // Arrange & Act & Assert
        for bad_p in [0.0_f64, 1.0] {
            match normal_quantile(bad_p) {
                Err(StatError::InvalidParameter { name, .. }) => assert_eq!(name, "p"),
                other => panic!("expected InvalidParameter for p = {bad_p}, got {other:?}"),
            }
        }

        for bad_df in [0.0_f64, -2.0] {
            match t_quantile(0.5, bad_df) {
                Err(StatError::InvalidParameter { name, .. }) => assert_eq!(name, "df"),
                other => panic!("expected InvalidParameter for df = {bad_df}, got {other:?}"),
            }
            match chi_square_quantile(0.5, bad_df) {
                Err(StatError::InvalidParameter { name, .. }) => assert_eq!(name, "df"),
                other => panic!("expected InvalidParameter for df = {bad_df}, got {other:?}"),
            }
        }
    }
}
