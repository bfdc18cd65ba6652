//! regression::result — fitted-model value object.
//!
//! Purpose
//! -------
//! Define [`RegressionResult`], the shared return type of the simple and
//! two-predictor fits: coefficient vector with per-term inference,
//! goodness-of-fit summaries, and residual degrees of freedom.
//!
//! Conventions
//! -----------
//! - `coefficients[0]` is always the intercept; slopes follow in
//!   predictor order. `std_errors`, `t_stats`, and `p_values` are
//!   aligned index-for-index with `coefficients`.

use crate::errors::StatResult;

/// RegressionResult — an ordinary-least-squares fit with per-term
/// inference.
///
/// Purpose
/// -------
/// Carry everything a report needs about a fitted linear model:
/// coefficients, their standard errors, t statistics and two-sided
/// p-values, R², root-mean-square error, and the residual df the
/// t statistics were referred to.
///
/// Fields
/// ------
/// - `coefficients`: `Vec<f64>`
///   `[0]` is the intercept, the rest are slopes in predictor order.
/// - `std_errors`, `t_stats`, `p_values`: `Vec<f64>`
///   Per-term inference, aligned with `coefficients`.
/// - `r_squared`: `f64`
///   Coefficient of determination, 1 − SS_res/SS_tot.
/// - `rmse`: `f64`
///   √(SS_res/n).
/// - `residual_df`: `f64`
///   n − p − 1; the df of the Student-t reference for `t_stats`.
///
/// Invariants
/// ----------
/// - All four per-term vectors have identical length ≥ 2.
/// - Constructed only by the fit functions in this module tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult {
    coefficients: Vec<f64>,
    std_errors: Vec<f64>,
    t_stats: Vec<f64>,
    p_values: Vec<f64>,
    r_squared: f64,
    rmse: f64,
    residual_df: f64,
}

impl RegressionResult {
    /// Assemble a result from coefficients and their standard errors,
    /// deriving t statistics and two-sided p-values against Student-t
    /// with `residual_df`.
    pub(crate) fn from_fit(
        coefficients: Vec<f64>, std_errors: Vec<f64>, r_squared: f64, rmse: f64, residual_df: f64,
    ) -> StatResult<Self> {
        let t_stats: Vec<f64> =
            coefficients.iter().zip(&std_errors).map(|(&b, &se)| b / se).collect();
        let p_values = t_stats
            .iter()
            .map(|&t| {
                let cdf = crate::distributions::quantiles::t_cdf(t.abs(), residual_df)?;
                Ok((2.0 * (1.0 - cdf)).min(1.0))
            })
            .collect::<StatResult<Vec<f64>>>()?;

        Ok(RegressionResult { coefficients, std_errors, t_stats, p_values, r_squared, rmse, residual_df })
    }

    /// Coefficient vector; `[0]` is the intercept.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// The fitted slopes, in predictor order.
    pub fn slopes(&self) -> &[f64] {
        &self.coefficients[1..]
    }

    /// Standard errors, aligned with [`RegressionResult::coefficients`].
    pub fn std_errors(&self) -> &[f64] {
        &self.std_errors
    }

    /// Per-term t statistics, aligned with the coefficients.
    pub fn t_stats(&self) -> &[f64] {
        &self.t_stats
    }

    /// Two-sided p-values, aligned with the coefficients.
    pub fn p_values(&self) -> &[f64] {
        &self.p_values
    }

    /// Coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Root-mean-square error of the residuals.
    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    /// Residual degrees of freedom of the t reference.
    pub fn residual_df(&self) -> f64 {
        self.residual_df
    }

    /// Predicted response for one observation of the predictors, in the
    /// same order the model was fitted with.
    pub fn predict(&self, predictors: &[f64]) -> f64 {
        self.intercept()
            + self.slopes().iter().zip(predictors).map(|(&b, &x)| b * x).sum::<f64>()
    }
}
