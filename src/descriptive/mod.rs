//! descriptive — point summaries for numeric samples.
//!
//! Purpose
//! -------
//! Collect the descriptive statistics (mean, sample variance and standard
//! deviation, median, mode) that both the consuming dashboard and the
//! inferential modules of this crate are built on.
//!
//! Key behaviors
//! -------------
//! - Expose each summary as a pure function over a `&[f64]` sample,
//!   returning `StatResult<f64>`.
//! - Validate length and finiteness once per call via `crate::validation`.
//!
//! Conventions
//! -----------
//! - Sample variance uses the unbiased n − 1 denominator throughout; this
//!   is the variance referred to wherever other modules write s².
//!
//! Downstream usage
//! ----------------
//! - `intervals` and `hypothesis` build standard errors from these
//!   summaries; `hypothesis::runs` defaults its reference point to
//!   [`median`].
//!
//! Testing notes
//! -------------
//! - Unit tests live in [`summary`]; the variance-vs-direct-sum identity
//!   is additionally asserted in the integration suite.

pub mod summary;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::summary::{mean, median, mode, sample_std, sample_variance};
