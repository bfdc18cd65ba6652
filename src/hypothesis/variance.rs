//! hypothesis::variance — chi-square test for a population variance.
//!
//! Purpose
//! -------
//! Implement the chi-square variance test with pivot (n−1)s²/σ₀²,
//! mirroring the interval in `intervals::variance`. The dashboard uses
//! the right-tailed form ("is the variability larger than claimed?") but
//! the bilateral and left-tailed forms are supported through the same
//! configuration.
//!
//! Key behaviors
//! -------------
//! - Statistic χ² = (n−1)s²/σ₀² against chi-square with df = n − 1.
//! - Two-sided p-value doubles the smaller tail (capped at 1); one-sided
//!   p-values take the configured tail directly.
//!
//! Invariants & assumptions
//! ------------------------
//! - n ≥ 2 finite observations; σ₀² strictly positive.
//! - A constant sample (s² = 0) is a legitimate input here: the
//!   statistic is 0 and the left tail simply carries all the evidence.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the statistic on hand-computed data, check the
//!   right-tailed decision against the table critical value, and
//!   exercise the σ₀² guard.

use crate::descriptive::summary::sample_variance;
use crate::errors::{StatError, StatResult};
use crate::hypothesis::config::TestConfig;
use crate::hypothesis::result::{ReferenceDistribution, TestResult};
use crate::validation::validate_sample;

/// Chi-square test for a population variance.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; n ≥ 2.
/// - `config`: `&TestConfig`
///   α, tail mode, and the hypothesized variance σ₀² > 0.
///
/// Returns
/// -------
/// `StatResult<TestResult>`
///   χ² = (n−1)s²/σ₀² against chi-square with df = n − 1.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter` when σ₀² ≤ 0 or non-finite.
/// - `StatError::InsufficientData` when n < 2.
pub fn variance_chi_square_test(data: &[f64], config: &TestConfig) -> StatResult<TestResult> {
    validate_sample(data, 2)?;

    let sigma0_sq = config.hypothesized();
    if !sigma0_sq.is_finite() || sigma0_sq <= 0.0 {
        return Err(StatError::InvalidParameter {
            name: "hypothesized variance",
            value: sigma0_sq,
        });
    }

    let df = (data.len() - 1) as f64;
    let statistic = df * sample_variance(data)? / sigma0_sq;

    TestResult::from_statistic(statistic, ReferenceDistribution::ChiSquared { df }, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::config::Tail;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The pivot formula on hand-computed data.
    // - A right-tailed decision against the table critical value.
    // - The σ₀² parameter guard.
    //
    // They intentionally DO NOT cover:
    // - Two-sided p-value mechanics, tested in `hypothesis::result`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the chi-square statistic: (n−1)s²/σ₀² on a sample with known
    // variance.
    //
    // Given
    // -----
    // - [2,4,4,4,5,5,7,9] with s² = 32/7, σ₀² = 2, right tail, α = 0.05.
    //
    // Expect
    // ------
    // - χ² = 7·(32/7)/2 = 16; right-tailed against χ²₀.₉₅(7) ≈ 14.067,
    //   so reject.
    fn variance_test_matches_hand_computation() {
        // Arrange
        let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let config = TestConfig::new(0.05, Tail::Right, 2.0).expect("config");

        // Act
        let result = variance_chi_square_test(&data, &config).expect("test should run");

        // Assert
        assert!((result.statistic() - 16.0).abs() < 1e-12, "χ² should be 16");
        let critical = result.critical_upper().expect("right tail has an upper bound");
        assert!((critical - 14.067).abs() < 1e-2, "critical should be ≈ 14.067, got {critical}");
        assert!(result.reject(), "16 > 14.067 should reject");
    }

    #[test]
    // Purpose
    // -------
    // Verify the hypothesized-variance guard: zero and negative σ₀² are
    // invalid.
    //
    // Given
    // -----
    // - σ₀² ∈ {0.0, −1.0} with a valid sample.
    //
    // Expect
    // ------
    // - `Err(StatError::InvalidParameter)` naming the variance.
    fn variance_test_rejects_non_positive_sigma0() {
        // Arrange
        let data = vec![1.0_f64, 2.0, 3.0];

        // Act & Assert
        for sigma0_sq in [0.0_f64, -1.0] {
            let config = TestConfig::two_sided(0.05, sigma0_sq).expect("config");
            match variance_chi_square_test(&data, &config) {
                Err(StatError::InvalidParameter { name, .. }) => {
                    assert_eq!(name, "hypothesized variance");
                }
                other => panic!("expected InvalidParameter for σ₀² = {sigma0_sq}, got {other:?}"),
            }
        }
    }
}
