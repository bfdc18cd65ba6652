//! regression::multiple — two-predictor ordinary least squares.
//!
//! Purpose
//! -------
//! Fit Y = β₀ + β₁X₁ + β₂X₂ by Cramer's rule on the 3×3 normal
//! equations XᵀXβ = Xᵀy, with per-term inference from the diagonal of
//! (XᵀX)⁻¹.
//!
//! Key behaviors
//! -------------
//! - Determinants via `nalgebra::Matrix3`; each coefficient is the
//!   determinant ratio with the corresponding column of XᵀX replaced by
//!   Xᵀy.
//! - MSE is SS_res/n; SE(βⱼ) = √(MSE·[(XᵀX)⁻¹]ⱼⱼ); inference at
//!   n − 3 df.
//!
//! Invariants & assumptions
//! ------------------------
//! - n ≥ 4 finite triples.
//! - Collinear predictors (or a constant one) drive |XᵀX| to zero and
//!   fail as singular rather than returning meaningless coefficients.
//!
//! Testing notes
//! -------------
//! - Unit tests pin exact recovery of a noiseless plane, collinearity
//!   detection, and the size guards.

use nalgebra::{Matrix3, Vector3};

use crate::errors::{StatError, StatResult};
use crate::regression::result::RegressionResult;
use crate::validation::validate_paired_samples;

/// Relative threshold below which |XᵀX| is treated as zero.
const SINGULARITY_TOLERANCE: f64 = 1e-10;

/// Fit a two-predictor linear regression Y = β₀ + β₁X₁ + β₂X₂.
///
/// Parameters
/// ----------
/// - `x1`, `x2`: `&[f64]`
///   Predictor columns; finite, n ≥ 4, same length as `y`.
/// - `y`: `&[f64]`
///   Response values.
///
/// Returns
/// -------
/// `StatResult<RegressionResult>`
///   Coefficients `[β₀, β₁, β₂]` with standard errors, t statistics,
///   and two-sided p-values at n − 3 df, plus R² and RMSE.
///
/// Errors
/// ------
/// - `StatError::InsufficientData` when n < 4.
/// - `StatError::InvalidParameter` on mismatched lengths.
/// - `StatError::SingularMatrix` when XᵀX is (near-)singular, e.g.
///   collinear or constant predictors.
/// - `StatError::DegenerateVariance` when the response is constant.
pub fn fit_two_predictors(x1: &[f64], x2: &[f64], y: &[f64]) -> StatResult<RegressionResult> {
    validate_paired_samples(x1, y, 4)?;
    validate_paired_samples(x2, y, 4)?;

    let n = y.len() as f64;
    let s1: f64 = x1.iter().sum();
    let s2: f64 = x2.iter().sum();
    let sy: f64 = y.iter().sum();
    let s11: f64 = x1.iter().map(|&v| v * v).sum();
    let s22: f64 = x2.iter().map(|&v| v * v).sum();
    let s12: f64 = x1.iter().zip(x2).map(|(&a, &b)| a * b).sum();
    let s1y: f64 = x1.iter().zip(y).map(|(&a, &b)| a * b).sum();
    let s2y: f64 = x2.iter().zip(y).map(|(&a, &b)| a * b).sum();

    let xtx = Matrix3::new(n, s1, s2, s1, s11, s12, s2, s12, s22);
    let xty = Vector3::new(sy, s1y, s2y);

    let det = xtx.determinant();
    let scale = n * s11.max(s22).max(1.0);
    if det.abs() < SINGULARITY_TOLERANCE * scale {
        return Err(StatError::SingularMatrix { determinant: det });
    }

    // Cramer's rule: replace column j of XᵀX with Xᵀy.
    let coefficients: Vec<f64> = (0..3)
        .map(|j| {
            let mut numerator = xtx;
            numerator.set_column(j, &xty);
            numerator.determinant() / det
        })
        .collect();

    let y_mean = sy / n;
    let ss_tot: f64 = y.iter().map(|&v| (v - y_mean).powi(2)).sum();
    if ss_tot <= 0.0 {
        return Err(StatError::DegenerateVariance { value: ss_tot });
    }
    let ss_res: f64 = x1
        .iter()
        .zip(x2)
        .zip(y)
        .map(|((&a, &b), &v)| {
            (v - coefficients[0] - coefficients[1] * a - coefficients[2] * b).powi(2)
        })
        .sum();

    let r_squared = 1.0 - ss_res / ss_tot;
    let mse = ss_res / n;
    let rmse = mse.sqrt();

    let inverse = xtx
        .try_inverse()
        .ok_or(StatError::SingularMatrix { determinant: det })?;
    let std_errors: Vec<f64> = (0..3).map(|j| (mse * inverse[(j, j)]).sqrt()).collect();

    RegressionResult::from_fit(coefficients, std_errors, r_squared, rmse, n - 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact recovery of a noiseless plane.
    // - Collinear-predictor detection.
    // - The length and minimum-size guards.
    //
    // They intentionally DO NOT cover:
    // - t/p derivation from SEs, tested in `regression::result`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify exact recovery: a noiseless plane must come back with its
    // own coefficients and a perfect fit.
    //
    // Given
    // -----
    // - Y = 1 + 2X₁ − 0.5X₂ over a non-collinear design.
    //
    // Expect
    // ------
    // - β = [1, 2, −0.5], R² = 1, RMSE ≈ 0, df = n − 3.
    fn noiseless_plane_is_recovered_exactly() {
        // Arrange
        let x1 = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x2 = vec![2.0_f64, 1.0, 4.0, 3.0, 6.0, 5.0];
        let y: Vec<f64> =
            x1.iter().zip(&x2).map(|(&a, &b)| 1.0 + 2.0 * a - 0.5 * b).collect();

        // Act
        let fit = fit_two_predictors(&x1, &x2, &y).expect("fit should succeed");

        // Assert
        assert!((fit.intercept() - 1.0).abs() < 1e-9);
        assert!((fit.slopes()[0] - 2.0).abs() < 1e-9);
        assert!((fit.slopes()[1] + 0.5).abs() < 1e-9);
        assert!((fit.r_squared() - 1.0).abs() < 1e-9);
        assert_eq!(fit.residual_df(), 3.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify collinearity detection: X₂ an exact linear function of X₁
    // makes XᵀX singular.
    //
    // Given
    // -----
    // - X₂ = 2X₁ + 1.
    //
    // Expect
    // ------
    // - `Err(StatError::SingularMatrix)`.
    fn collinear_predictors_are_singular() {
        // Arrange
        let x1 = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let x2: Vec<f64> = x1.iter().map(|&v| 2.0 * v + 1.0).collect();
        let y = vec![3.0_f64, 5.0, 6.0, 9.0, 11.0];

        // Act & Assert
        match fit_two_predictors(&x1, &x2, &y) {
            Err(StatError::SingularMatrix { .. }) => {}
            other => panic!("expected SingularMatrix, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the minimum-size guard: three observations cannot identify
    // three coefficients with residual df left over.
    //
    // Given
    // -----
    // - n = 3 triples.
    //
    // Expect
    // ------
    // - `Err(StatError::InsufficientData)`.
    fn undersized_fit_is_rejected() {
        // Arrange
        let x1 = vec![1.0_f64, 2.0, 3.0];
        let x2 = vec![2.0_f64, 4.0, 5.0];
        let y = vec![1.0_f64, 2.0, 3.0];

        // Act & Assert
        match fit_two_predictors(&x1, &x2, &y) {
            Err(StatError::InsufficientData { required, actual }) => {
                assert_eq!((required, actual), (4, 3));
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }
}
