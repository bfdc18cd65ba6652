//! regression::simple — one-predictor ordinary least squares.
//!
//! Purpose
//! -------
//! Fit Y = β₀ + β₁X by the textbook sum formulas and report per-term
//! inference, R², and RMSE through [`RegressionResult`].
//!
//! Key behaviors
//! -------------
//! - β₁ = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²), β₀ = ȳ − β₁x̄.
//! - MSE is SS_res/n; the slope variance scales it by (n−1)/(n−2)
//!   before dividing by Σ(x − x̄)².
//! - Inference is referred to Student-t with n − 2 df.
//!
//! Invariants & assumptions
//! ------------------------
//! - n ≥ 3 finite pairs.
//! - A constant predictor makes the normal equations singular; a
//!   constant response has no variance to explain.
//!
//! Testing notes
//! -------------
//! - Unit tests pin exact recovery on a noiseless line, hand-computed
//!   coefficients on a small dataset, and both degenerate edges.

use crate::errors::{StatError, StatResult};
use crate::regression::result::RegressionResult;
use crate::validation::validate_paired_samples;

/// Fit a simple linear regression Y = β₀ + β₁X.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Predictor values; finite, n ≥ 3.
/// - `y`: `&[f64]`
///   Response values, paired with `x`.
///
/// Returns
/// -------
/// `StatResult<RegressionResult>`
///   Coefficients `[β₀, β₁]` with standard errors, t statistics, and
///   two-sided p-values at n − 2 df, plus R² and RMSE.
///
/// Errors
/// ------
/// - `StatError::InsufficientData` when n < 3.
/// - `StatError::InvalidParameter` on mismatched lengths.
/// - `StatError::SingularMatrix` when the predictor is constant.
/// - `StatError::DegenerateVariance` when the response is constant.
pub fn fit_simple(x: &[f64], y: &[f64]) -> StatResult<RegressionResult> {
    validate_paired_samples(x, y, 3)?;

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(&a, &b)| a * b).sum();
    let sum_x_sq: f64 = x.iter().map(|&a| a * a).sum();

    let denominator = n * sum_x_sq - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON * n * sum_x_sq.abs().max(1.0) {
        return Err(StatError::SingularMatrix { determinant: denominator });
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let x_mean = sum_x / n;
    let y_mean = sum_y / n;
    let ss_tot: f64 = y.iter().map(|&v| (v - y_mean).powi(2)).sum();
    if ss_tot <= 0.0 {
        return Err(StatError::DegenerateVariance { value: ss_tot });
    }
    let ss_res: f64 =
        x.iter().zip(y).map(|(&a, &b)| (b - intercept - slope * a).powi(2)).sum();
    let s_xx: f64 = x.iter().map(|&v| (v - x_mean).powi(2)).sum();

    let r_squared = 1.0 - ss_res / ss_tot;
    let mse = ss_res / n;
    let rmse = mse.sqrt();

    let residual_df = n - 2.0;
    let slope_var = mse * (n - 1.0) / residual_df / s_xx;
    let error_var = slope_var * s_xx;
    let intercept_var = error_var * (1.0 / n + x_mean * x_mean / s_xx);

    RegressionResult::from_fit(
        vec![intercept, slope],
        vec![intercept_var.sqrt(), slope_var.sqrt()],
        r_squared,
        rmse,
        residual_df,
    )
}
