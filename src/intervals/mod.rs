//! intervals — confidence-interval constructors.
//!
//! Purpose
//! -------
//! Build confidence intervals for every parameter the dashboard reasons
//! about: one mean (known/unknown σ), a difference of means (known σ /
//! pooled / Welch), one and two proportions, and a variance. All follow
//! the estimate ± (critical value × standard error) pattern except the
//! asymmetric chi-square variance interval.
//!
//! Key behaviors
//! -------------
//! - Every constructor is a pure function over `&[f64]` samples (or
//!   `u64` counts) returning a [`IntervalResult`] value object.
//! - Confidence levels live strictly inside (0, 1); two-sided critical
//!   values are taken at 1 − (1 − c)/2.
//! - Shared quantities reused by the hypothesis tests (pooled variance,
//!   Welch–Satterthwaite df) are exposed from [`two_sample`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Interval constructors report failures via `StatResult` and never
//!   panic on user-facing invalid inputs.
//! - Proportion intervals clip to the parameter's natural range; the
//!   variance interval requires a strictly positive s².
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use survey_inference::intervals::{mean_unknown_sigma, IntervalResult};
//!
//!   let scores = vec![4.0, 5.0, 3.0, 4.0, 5.0];
//!   let ci: IntervalResult = mean_unknown_sigma(&scores, 0.95)?;
//!   # Ok::<(), survey_inference::errors::StatError>(())
//!   ```
//! - The two-sided hypothesis tests in `hypothesis` are decision-rule
//!   mirrors of these intervals; the integration suite asserts the
//!   reject ⇔ value-outside-interval equivalence for the mean.
//!
//! Testing notes
//! -------------
//! - Each submodule pins its formulas on hand-computed samples and
//!   exercises its guard branches; Monte Carlo coverage of the known-σ
//!   mean interval lives in the integration suite.

pub mod mean;
pub mod proportion;
pub mod result;
pub mod two_sample;
pub mod variance;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::mean::{mean_known_sigma, mean_unknown_sigma};
pub use self::proportion::{proportion, proportion_difference};
pub use self::result::IntervalResult;
pub use self::two_sample::{
    mean_difference_known_sigmas, mean_difference_pooled, mean_difference_welch, pooled_variance,
    welch_satterthwaite_df,
};
pub use self::variance::variance;
