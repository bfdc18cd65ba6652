//! descriptive::summary — point summaries for a numeric sample.
//!
//! Purpose
//! -------
//! Provide the closed-form descriptive statistics every other module in
//! this crate builds on: mean, sample variance and standard deviation
//! (denominator n − 1), median, and mode. These are the quantities a
//! survey dashboard substitutes into its narrative sentences, and they
//! double as standard-error building blocks for intervals and tests.
//!
//! Key behaviors
//! -------------
//! - Compute each summary with the textbook formula; no shrinkage, no
//!   weighting, no missing-value handling.
//! - Validate inputs once per entry point via `crate::validation` and
//!   report failures through `StatResult` instead of panicking.
//! - Resolve mode ties by returning the value that appears first in the
//!   input order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Mean, median, and mode require a non-empty sample; variance and
//!   standard deviation require n ≥ 2.
//! - All inputs must be finite; `validate_sample` rejects NaN and ±∞.
//! - Samples are small (the motivating dataset has 30 rows), so the mode
//!   scan is a simple O(n²) pass rather than a hash-based count.
//!
//! Conventions
//! -----------
//! - Sample variance always uses the unbiased n − 1 denominator; callers
//!   that need the population variance scale it themselves.
//! - Median of an even-length sample is the average of the two middle
//!   order statistics.
//!
//! Downstream usage
//! ----------------
//! - `intervals` and `hypothesis` call [`mean`], [`sample_variance`], and
//!   [`sample_std`] when building standard errors.
//! - `hypothesis::runs` uses [`median`] as the default reference point.
//!
//! Testing notes
//! -------------
//! - Unit tests verify each formula on hand-computed samples, the
//!   even/odd median split, first-wins mode ties, and the error branches
//!   for empty and single-element samples.

use crate::errors::StatResult;
use crate::validation::validate_sample;

/// Compute the arithmetic mean x̄ = (1 / n) ∑ xᵢ.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; must be non-empty.
///
/// Returns
/// -------
/// `StatResult<f64>`
///   The mean, or `StatError::InsufficientData` / `NonFiniteValue` when
///   validation fails.
pub fn mean(data: &[f64]) -> StatResult<f64> {
    validate_sample(data, 1)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Compute the sample variance s² = ∑ (xᵢ − x̄)² / (n − 1).
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; requires n ≥ 2 so the n − 1
///   denominator is well-defined.
///
/// Returns
/// -------
/// `StatResult<f64>`
///   The unbiased sample variance, or `StatError::InsufficientData` /
///   `NonFiniteValue` when validation fails.
///
/// Notes
/// -----
/// - A constant sample yields a variance of exactly 0.0, which is a valid
///   descriptive result here; procedures that need a strictly positive
///   variance (pooled tests, the chi-square interval) detect the zero and
///   report `DegenerateVariance` at their own level.
pub fn sample_variance(data: &[f64]) -> StatResult<f64> {
    validate_sample(data, 2)?;
    let m = data.iter().sum::<f64>() / data.len() as f64;
    let ss: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    Ok(ss / (data.len() - 1) as f64)
}

/// Compute the sample standard deviation s = √s².
///
/// Same constraints and error behavior as [`sample_variance`].
pub fn sample_std(data: &[f64]) -> StatResult<f64> {
    Ok(sample_variance(data)?.sqrt())
}

/// Compute the median of a sample.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; must be non-empty.
///
/// Returns
/// -------
/// `StatResult<f64>`
///   The middle order statistic for odd n, the average of the two middle
///   order statistics for even n.
pub fn median(data: &[f64]) -> StatResult<f64> {
    validate_sample(data, 1)?;

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("validated finite values"));

    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Compute the mode of a sample: the most frequent value, with ties
/// resolved in favor of the value appearing first in the input.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample of finite observations; must be non-empty. Values are
///   compared with exact `f64` equality, which is appropriate for the
///   integer-coded survey columns this crate was built around.
///
/// Returns
/// -------
/// `StatResult<f64>`
///   The first modal value.
pub fn mode(data: &[f64]) -> StatResult<f64> {
    validate_sample(data, 1)?;

    let mut best = data[0];
    let mut best_count = 0usize;
    for (i, &candidate) in data.iter().enumerate() {
        // Only the first occurrence of each distinct value is a candidate,
        // so ties keep the earliest value.
        if data[..i].contains(&candidate) {
            continue;
        }
        let count = data.iter().filter(|&&x| x == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    Ok(best)
}
