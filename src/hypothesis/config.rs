//! hypothesis::config — immutable test configuration.
//!
//! Purpose
//! -------
//! Define the two value objects every parametric test takes: the tail
//! mode ([`Tail`]) and the full configuration ([`TestConfig`]) holding the
//! significance level α, the tail, and the hypothesized parameter value
//! (μ₀, π₀, σ₀², or a hypothesized difference).
//!
//! Key behaviors
//! -------------
//! - `TestConfig::new` validates α ∈ (0, 1) once; tests then trust it.
//! - Convenience constructors cover the dominant case in the consuming
//!   dashboard (two-sided at a given α).
//!
//! Invariants & assumptions
//! ------------------------
//! - A `TestConfig` is created once per invocation and never mutated;
//!   both types derive `Copy`.
//! - The hypothesized value is interpreted by each test (a mean, a
//!   proportion, a variance, a difference); per-test range checks (e.g.,
//!   π₀ ∈ (0, 1), σ₀² > 0) happen in the test entry points.
//!
//! Conventions
//! -----------
//! - `Tail::Left` means H₁ claims the parameter is *below* the
//!   hypothesized value; `Tail::Right` that it is above.
//!
//! Downstream usage
//! ----------------
//! - Every function in `hypothesis::{mean, proportion, variance}` takes a
//!   `TestConfig`; the non-parametric tests take a bare α because they
//!   are bilateral by construction.
//!
//! Testing notes
//! -------------
//! - Unit tests cover α validation and accessor behavior.

use crate::errors::StatResult;
use crate::validation::validate_unit_open;

/// Tail — which alternative hypothesis a test evaluates.
///
/// Two-sided compares |statistic| against the 1 − α/2 critical value;
/// one-sided compares the signed statistic against the 1 − α value on
/// the claimed side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tail {
    TwoSided,
    Left,
    Right,
}

/// TestConfig — α, tail mode, and hypothesized value for one test run.
///
/// Purpose
/// -------
/// Bundle the caller's decision context so a test function's signature is
/// just (sample(s), config). Constructed once per invocation; immutable.
///
/// Fields
/// ------
/// - `alpha`: `f64`
///   Significance level, strictly inside (0, 1).
/// - `tail`: [`Tail`]
///   Alternative-hypothesis direction.
/// - `hypothesized`: `f64`
///   The null value of the parameter under test (μ₀, π₀, σ₀², or a
///   difference; the dashboard's two-sample tests always use 0).
///
/// Invariants
/// ----------
/// - `alpha` validated at construction; no further mutation is possible.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TestConfig {
    alpha: f64,
    tail: Tail,
    hypothesized: f64,
}

impl TestConfig {
    /// Build a configuration, validating α ∈ (0, 1).
    ///
    /// Errors
    /// ------
    /// - `StatError::InvalidParameter` when `alpha` is non-finite or
    ///   outside the open unit interval, or when `hypothesized` is not
    ///   finite.
    pub fn new(alpha: f64, tail: Tail, hypothesized: f64) -> StatResult<Self> {
        validate_unit_open("alpha", alpha)?;
        if !hypothesized.is_finite() {
            return Err(crate::errors::StatError::InvalidParameter {
                name: "hypothesized",
                value: hypothesized,
            });
        }
        Ok(TestConfig { alpha, tail, hypothesized })
    }

    /// Two-sided configuration at the given α — the dashboard default.
    pub fn two_sided(alpha: f64, hypothesized: f64) -> StatResult<Self> {
        Self::new(alpha, Tail::TwoSided, hypothesized)
    }

    /// Significance level α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Alternative-hypothesis direction.
    pub fn tail(&self) -> Tail {
        self.tail
    }

    /// Hypothesized parameter value under H₀.
    pub fn hypothesized(&self) -> f64 {
        self.hypothesized
    }
}
