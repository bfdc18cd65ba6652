//! hypothesis::result — reference distributions and the test-result
//! value object.
//!
//! Purpose
//! -------
//! Define [`ReferenceDistribution`] (which null distribution a statistic
//! is compared against) and [`TestResult`], the immutable value every
//! hypothesis test returns: statistic, reference distribution, critical
//! bound(s), p-value, and the reject/fail-to-reject decision. Also house
//! the single implementation of the tail → p-value / critical-value
//! logic, so every test derives its decision identically.
//!
//! Key behaviors
//! -------------
//! - Symmetric distributions (normal, Student-t): two-sided
//!   p = 2·(1 − F(|z|)); one-sided p from the claimed tail; critical
//!   bounds at ±q₁₋α/₂ or the one-sided q.
//! - Chi-square: two-sided p = 2·min(F, 1 − F) capped at 1; critical
//!   bounds at the α/2 and 1 − α/2 quantiles.
//! - Binomial (exact sign test): the p-value is computed by the test
//!   itself; the result is built via [`TestResult::from_p_value`] and has
//!   no critical bounds.
//! - Decision rule: reject H₀ iff p-value < α.
//!
//! Invariants & assumptions
//! ------------------------
//! - `p_value` lies in [0, 1]; the chi-square two-sided doubling is
//!   explicitly capped.
//! - `reject` is always exactly `p_value < alpha`; no other pathway sets
//!   it.
//! - The statistic is finite whenever construction succeeds.
//!
//! Downstream usage
//! ----------------
//! - Test modules compute (statistic, distribution) and call
//!   [`TestResult::from_statistic`] with the caller's [`TestConfig`];
//!   presentation code reads the accessors.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the tail logic per distribution family, the
//!   chi-square p-value cap, and the decision rule at the α boundary.

use crate::distributions::quantiles::{
    chi_square_cdf, chi_square_quantile, normal_cdf, normal_quantile, t_cdf, t_quantile,
};
use crate::errors::StatResult;
use crate::hypothesis::config::{Tail, TestConfig};

/// ReferenceDistribution — the null distribution of a test statistic.
///
/// Degrees of freedom travel with the variant so a [`TestResult`] is
/// self-describing (the Welch test reports its fractional ν here).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ReferenceDistribution {
    StandardNormal,
    StudentT { df: f64 },
    ChiSquared { df: f64 },
    /// Exact binomial null of the sign test; `trials` is the number of
    /// non-tied pairs.
    Binomial { trials: u64 },
}

impl ReferenceDistribution {
    /// Degrees of freedom, when the distribution has them.
    pub fn degrees_of_freedom(&self) -> Option<f64> {
        match self {
            ReferenceDistribution::StudentT { df } | ReferenceDistribution::ChiSquared { df } => {
                Some(*df)
            }
            _ => None,
        }
    }
}

/// TestResult — the outcome of a single hypothesis test.
///
/// Purpose
/// -------
/// Hold everything the caller needs to report a test: the statistic, its
/// reference distribution (with df where applicable), the critical
/// bound(s) for the configured tail, the p-value, and the decision.
///
/// Fields
/// ------
/// - `statistic`: `f64`
///   The computed test statistic (z, t, χ², or the sign-test count).
/// - `distribution`: [`ReferenceDistribution`]
///   Null distribution the statistic was compared against.
/// - `critical_lower`, `critical_upper`: `Option<f64>`
///   Rejection-region boundaries for the configured tail; a two-sided z
///   test carries both, a right-tailed test only the upper, the exact
///   binomial sign test neither.
/// - `p_value`: `f64`
///   Tail probability under H₀; always in [0, 1].
/// - `alpha`: `f64`
///   Significance level the decision was made at.
/// - `reject`: `bool`
///   Exactly `p_value < alpha`.
///
/// Invariants
/// ----------
/// - Constructed only by the test functions in this crate; has no
///   independent lifetime beyond the call that produced it.
///
/// Notes
/// -----
/// - Derives `Copy`; cheap to return by value and to hand across the
///   Python boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TestResult {
    statistic: f64,
    distribution: ReferenceDistribution,
    critical_lower: Option<f64>,
    critical_upper: Option<f64>,
    p_value: f64,
    alpha: f64,
    reject: bool,
}

impl TestResult {
    /// Build a result from a statistic and its reference distribution,
    /// deriving p-value, critical bounds, and decision from the config.
    ///
    /// Only the normal, Student-t, and chi-square families are valid
    /// here; the exact binomial path supplies its own p-value through
    /// [`TestResult::from_p_value`].
    pub(crate) fn from_statistic(
        statistic: f64, distribution: ReferenceDistribution, config: &TestConfig,
    ) -> StatResult<Self> {
        let alpha = config.alpha();

        let (p_value, critical_lower, critical_upper) = match distribution {
            ReferenceDistribution::StandardNormal => {
                symmetric_tail(statistic, config, normal_cdf, normal_quantile)?
            }
            ReferenceDistribution::StudentT { df } => {
                crate::validation::validate_df(df)?;
                symmetric_tail(statistic, config, |x| t_cdf(x, df).expect("df validated"), |p| {
                    t_quantile(p, df)
                })?
            }
            ReferenceDistribution::ChiSquared { df } => {
                let cdf = chi_square_cdf(statistic, df)?;
                match config.tail() {
                    Tail::TwoSided => (
                        (2.0 * cdf.min(1.0 - cdf)).min(1.0),
                        Some(chi_square_quantile(alpha / 2.0, df)?),
                        Some(chi_square_quantile(1.0 - alpha / 2.0, df)?),
                    ),
                    Tail::Left => (cdf, Some(chi_square_quantile(alpha, df)?), None),
                    Tail::Right => (1.0 - cdf, None, Some(chi_square_quantile(1.0 - alpha, df)?)),
                }
            }
            ReferenceDistribution::Binomial { .. } => {
                // The sign test owns the exact-binomial p-value; a request
                // to derive one here is a programming error, not bad input.
                unreachable!("binomial results are built via from_p_value")
            }
        };

        Ok(TestResult {
            statistic,
            distribution,
            critical_lower,
            critical_upper,
            p_value,
            alpha,
            reject: p_value < alpha,
        })
    }

    /// Build a result from a precomputed p-value (exact sign test); no
    /// critical bounds apply.
    pub(crate) fn from_p_value(
        statistic: f64, distribution: ReferenceDistribution, alpha: f64, p_value: f64,
    ) -> Self {
        TestResult {
            statistic,
            distribution,
            critical_lower: None,
            critical_upper: None,
            p_value,
            alpha,
            reject: p_value < alpha,
        }
    }

    /// The computed test statistic.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Null distribution the statistic was compared against.
    pub fn distribution(&self) -> ReferenceDistribution {
        self.distribution
    }

    /// Lower rejection-region boundary, when the tail mode has one.
    pub fn critical_lower(&self) -> Option<f64> {
        self.critical_lower
    }

    /// Upper rejection-region boundary, when the tail mode has one.
    pub fn critical_upper(&self) -> Option<f64> {
        self.critical_upper
    }

    /// Tail probability of the statistic under H₀.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Significance level the decision was made at.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Whether H₀ is rejected (p-value < α).
    pub fn reject(&self) -> bool {
        self.reject
    }
}

/// Tail logic shared by the symmetric families (normal, Student-t).
///
/// Returns (p-value, critical lower, critical upper) for the configured
/// tail, given the family's CDF and quantile functions.
fn symmetric_tail(
    statistic: f64, config: &TestConfig, cdf: impl Fn(f64) -> f64,
    quantile: impl Fn(f64) -> StatResult<f64>,
) -> StatResult<(f64, Option<f64>, Option<f64>)> {
    let alpha = config.alpha();
    Ok(match config.tail() {
        Tail::TwoSided => {
            let c = quantile(1.0 - alpha / 2.0)?;
            (2.0 * (1.0 - cdf(statistic.abs())), Some(-c), Some(c))
        }
        Tail::Left => (cdf(statistic), Some(quantile(alpha)?), None),
        Tail::Right => (1.0 - cdf(statistic), None, Some(quantile(1.0 - alpha)?)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Two-sided and one-sided p-values and critical bounds for the
    //   normal family.
    // - The chi-square two-sided doubling and its cap at 1.
    // - The decision rule reject ⇔ p < α.
    //
    // They intentionally DO NOT cover:
    // - Every test statistic's formula; those live with the tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the two-sided normal path: p-value, symmetric critical
    // bounds, and rejection for a large statistic.
    //
    // Given
    // -----
    // - z = 2.5 under a two-sided α = 0.05 config.
    //
    // Expect
    // ------
    // - p ≈ 2·(1 − Φ(2.5)) ≈ 0.01242; bounds ±1.95996; reject.
    fn two_sided_normal_result_matches_hand_computation() {
        // Arrange
        let config = TestConfig::two_sided(0.05, 0.0).expect("config");

        // Act
        let result =
            TestResult::from_statistic(2.5, ReferenceDistribution::StandardNormal, &config)
                .expect("result should build");

        // Assert
        assert!((result.p_value() - 0.01242).abs() < 1e-4, "p ≈ 0.01242, got {}", result.p_value());
        let upper = result.critical_upper().expect("two-sided has an upper bound");
        let lower = result.critical_lower().expect("two-sided has a lower bound");
        assert!((upper - 1.95996).abs() < 1e-3);
        assert!((lower + upper).abs() < 1e-12, "bounds should be symmetric");
        assert!(result.reject(), "z = 2.5 should reject at α = 0.05");
    }

    #[test]
    // Purpose
    // -------
    // Verify the one-sided tails: a negative statistic is strong
    // evidence for `Tail::Left` and none for `Tail::Right`.
    //
    // Given
    // -----
    // - z = −2.0 at α = 0.05, both one-sided configs.
    //
    // Expect
    // ------
    // - Left: p = Φ(−2) ≈ 0.02275, reject, only a lower bound.
    //   Right: p ≈ 0.97725, fail to reject, only an upper bound.
    fn one_sided_normal_results_use_the_claimed_tail() {
        // Arrange
        let left = TestConfig::new(0.05, Tail::Left, 0.0).expect("config");
        let right = TestConfig::new(0.05, Tail::Right, 0.0).expect("config");

        // Act
        let left_result =
            TestResult::from_statistic(-2.0, ReferenceDistribution::StandardNormal, &left)
                .expect("left result");
        let right_result =
            TestResult::from_statistic(-2.0, ReferenceDistribution::StandardNormal, &right)
                .expect("right result");

        // Assert
        assert!((left_result.p_value() - 0.02275).abs() < 1e-4);
        assert!(left_result.reject());
        assert!(left_result.critical_upper().is_none());

        assert!((right_result.p_value() - 0.97725).abs() < 1e-4);
        assert!(!right_result.reject());
        assert!(right_result.critical_lower().is_none());
    }

    #[test]
    // Purpose
    // -------
    // Verify the chi-square two-sided p-value doubles the smaller tail
    // and caps at 1 when the statistic sits at the distribution's bulk.
    //
    // Given
    // -----
    // - χ² equal to the df (near the center) and a far-right χ², df = 10.
    //
    // Expect
    // ------
    // - Central statistic: p close to 1 and never above it.
    //   Far statistic (30): tiny p, reject.
    fn chi_square_two_sided_p_value_is_capped() {
        // Arrange
        let config = TestConfig::two_sided(0.05, 1.0).expect("config");
        let dist = ReferenceDistribution::ChiSquared { df: 10.0 };

        // Act
        let central = TestResult::from_statistic(9.34, dist, &config).expect("central result");
        let extreme = TestResult::from_statistic(30.0, dist, &config).expect("extreme result");

        // Assert
        assert!(central.p_value() <= 1.0, "p-value must never exceed 1");
        assert!(central.p_value() > 0.9, "central statistic should have p near 1");
        assert!(!central.reject());
        assert!(extreme.p_value() < 0.01);
        assert!(extreme.reject());
    }

    #[test]
    // Purpose
    // -------
    // Verify the Student-t family threads its df through both p-value
    // and critical bounds.
    //
    // Given
    // -----
    // - t = 2.0 with df = 5 versus df = 50, two-sided α = 0.05.
    //
    // Expect
    // ------
    // - The df = 5 p-value exceeds the df = 50 one (heavier tails), and
    //   the df = 5 critical bound is larger.
    fn student_t_results_depend_on_df() {
        // Arrange
        let config = TestConfig::two_sided(0.05, 0.0).expect("config");

        // Act
        let small_df =
            TestResult::from_statistic(2.0, ReferenceDistribution::StudentT { df: 5.0 }, &config)
                .expect("small-df result");
        let large_df =
            TestResult::from_statistic(2.0, ReferenceDistribution::StudentT { df: 50.0 }, &config)
                .expect("large-df result");

        // Assert
        assert!(small_df.p_value() > large_df.p_value());
        assert!(
            small_df.critical_upper().expect("upper") > large_df.critical_upper().expect("upper")
        );
        assert_eq!(small_df.distribution().degrees_of_freedom(), Some(5.0));
    }
}
