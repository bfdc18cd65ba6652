//! intervals::result — the confidence-interval value object.
//!
//! Purpose
//! -------
//! Define [`IntervalResult`], the immutable value returned by every
//! interval constructor in this crate: point estimate, margin of error,
//! lower/upper bounds, and the confidence level used.
//!
//! Key behaviors
//! -------------
//! - Built either symmetrically (estimate ± margin) or from explicit
//!   bounds (the chi-square variance interval is asymmetric).
//! - Optionally clipped to a parameter's natural range (proportions to
//!   [0, 1], proportion differences to [−1, 1]).
//! - Exposes lightweight accessors so downstream code does not depend on
//!   the internal layout.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lower ≤ upper` always holds after construction.
//! - `confidence` lies strictly inside (0, 1); constructors validate it
//!   before building the result.
//! - For asymmetric intervals, `margin_of_error` is the half-width
//!   (upper − lower) / 2.
//!
//! Conventions
//! -----------
//! - The value object owns only five scalars and derives `Copy`; it has
//!   no lifetime of its own beyond the call that produced it.
//!
//! Downstream usage
//! ----------------
//! - Presentation code reads `point_estimate`, `margin_of_error`,
//!   `lower`, and `upper` to fill narrative templates; `confidence`
//!   echoes the level back for display.
//!
//! Testing notes
//! -------------
//! - Constructor behavior (symmetry, clipping, half-width margin) is
//!   tested here; the statistical content of each interval is tested in
//!   the module that computes it.

/// IntervalResult — point estimate, margin, and bounds of a confidence
/// interval.
///
/// Purpose
/// -------
/// Hold the outcome of a single confidence-interval construction. The
/// struct is a plain value: it does not remember which parameter it
/// estimates, only the numbers the caller asked for.
///
/// Fields
/// ------
/// - `point_estimate`: `f64`
///   The sample estimate at the interval's center (x̄, p̂, x̄₁ − x̄₂, s²).
/// - `margin_of_error`: `f64`
///   Critical value × standard error for symmetric intervals; half the
///   width for asymmetric ones.
/// - `lower`, `upper`: `f64`
///   Interval bounds, possibly clipped to the parameter's natural range.
/// - `confidence`: `f64`
///   The confidence level (e.g., 0.95) the interval was built for.
///
/// Invariants
/// ----------
/// - `lower ≤ upper`; all fields are finite whenever construction
///   succeeds.
///
/// Notes
/// -----
/// - Derives `Copy`; cheap to return by value and to hand across the
///   Python boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntervalResult {
    point_estimate: f64,
    margin_of_error: f64,
    lower: f64,
    upper: f64,
    confidence: f64,
}

impl IntervalResult {
    /// Build a symmetric interval: estimate ± margin.
    pub(crate) fn from_margin(point_estimate: f64, margin: f64, confidence: f64) -> Self {
        IntervalResult {
            point_estimate,
            margin_of_error: margin,
            lower: point_estimate - margin,
            upper: point_estimate + margin,
            confidence,
        }
    }

    /// Build a symmetric interval and clip its bounds to `[min, max]`.
    ///
    /// Used by the proportion intervals, whose sampling-theory bounds can
    /// spill outside the parameter's natural range for extreme p̂.
    pub(crate) fn from_margin_clipped(
        point_estimate: f64, margin: f64, confidence: f64, min: f64, max: f64,
    ) -> Self {
        let mut result = Self::from_margin(point_estimate, margin, confidence);
        result.lower = result.lower.max(min);
        result.upper = result.upper.min(max);
        result
    }

    /// Build an asymmetric interval from explicit bounds; the margin is
    /// recorded as the half-width.
    pub(crate) fn from_bounds(point_estimate: f64, lower: f64, upper: f64, confidence: f64) -> Self {
        IntervalResult {
            point_estimate,
            margin_of_error: (upper - lower) / 2.0,
            lower,
            upper,
            confidence,
        }
    }

    /// The sample estimate at the interval's center.
    pub fn point_estimate(&self) -> f64 {
        self.point_estimate
    }

    /// Critical value × standard error (half-width for asymmetric
    /// intervals).
    pub fn margin_of_error(&self) -> f64 {
        self.margin_of_error
    }

    /// Lower interval bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper interval bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The confidence level the interval was built for.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Whether a hypothesized parameter value lies inside the interval
    /// (inclusive). Used by the round-trip consistency checks against the
    /// matching two-sided hypothesis tests.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}
