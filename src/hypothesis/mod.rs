//! hypothesis — parametric and nonparametric tests for survey analysis.
//!
//! Purpose
//! -------
//! House every hypothesis test the crate offers: z and t tests for means
//! and mean differences, z tests for proportions and proportion
//! differences, the chi-square variance test, and the nonparametric sign
//! and runs tests. All tests share [`TestConfig`] for α/tail/H₀ input
//! and return [`TestResult`] so callers report them uniformly.
//!
//! Key behaviors
//! -------------
//! - Tail handling, p-values, and critical bounds are derived in one
//!   place (`result`); test modules only compute the statistic and its
//!   reference distribution.
//! - Standard errors and degrees of freedom are shared with the
//!   matching confidence intervals in [`crate::intervals`], so a
//!   two-sided test at α and a (1 − α) interval always agree.
//!
//! Downstream usage
//! ----------------
//! - Native callers import the test functions directly; the Python
//!   bindings in the crate root wrap a subset of them.

pub mod config;
pub mod mean;
pub mod proportion;
pub mod result;
pub mod runs;
pub mod sign;
pub mod variance;

pub use config::{Tail, TestConfig};
pub use mean::{
    mean_difference_pooled_test, mean_difference_welch_test, mean_difference_z_test, mean_t_test,
    mean_z_test,
};
pub use proportion::{proportion_difference_z_test, proportion_z_test};
pub use result::{ReferenceDistribution, TestResult};
pub use runs::{runs_test, runs_test_around_median};
pub use sign::sign_test;
pub use variance::variance_chi_square_test;
