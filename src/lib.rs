//! survey_inference — statistical primitives for survey analysis with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the core estimation and testing routines to Python via the
//! `_survey_inference` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing classes and submodules used
//! by the `survey_inference` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`descriptive`, `distributions`,
//!   `intervals`, `hypothesis`, `regression`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_survey_inference` Python extension.
//! - Create and register Python submodules (`hypothesis_tests`, `regression`)
//!   under `survey_inference` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g. `MeanTTest`
//!   wraps [`hypothesis::mean_t_test`]).
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_survey_inference.<submodule>` and are
//!   wrapped by thin pure-Python facades in the top-level `survey_inference`
//!   package.
//! - Samples cross the boundary as plain Python sequences of floats; the
//!   datasets this crate targets are small enough that zero-copy array
//!   extraction buys nothing.
//! - Errors from core Rust code are propagated as [`errors::StatError`]
//!   internally and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_survey_inference` module defined
//!   here and wraps its classes in user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the survey pipeline integration test; binding smoke tests live on the
//!   Python side.

pub mod descriptive;
pub mod distributions;
pub mod errors;
pub mod hypothesis;
pub mod intervals;
pub mod regression;
pub mod validation;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    hypothesis::{
        config::TestConfig, mean_t_test, result::TestResult, runs_test_around_median, sign_test,
    },
    regression::{fit_simple, RegressionResult},
};

/// MeanTTest — Python-facing wrapper for the one-sample Student-t mean test.
///
/// Purpose
/// -------
/// Run the two-sided one-sample t test from Python and expose the outcome
/// through read-only properties, forwarding all computation to
/// [`hypothesis::mean_t_test`].
///
/// Parameters
/// ----------
/// Constructed from Python via `MeanTTest(data, mu0, alpha=0.05)`:
/// - `data`: sequence of floats, n ≥ 2, no NaNs.
/// - `mu0`: hypothesized mean.
/// - `alpha`: significance level in (0, 1).
///
/// Fields
/// ------
/// - `inner`: [`TestResult`]
///   Rust-side outcome backing the accessors.
///
/// Notes
/// -----
/// - Native Rust callers should use [`hypothesis::mean_t_test`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "survey_inference.hypothesis_tests")]
pub struct MeanTTest {
    /// The t-test result struct.
    inner: TestResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MeanTTest {
    #[new]
    #[pyo3(text_signature = "(data, mu0, /, alpha=0.05)", signature = (data, mu0, alpha = 0.05))]
    pub fn new(data: Vec<f64>, mu0: f64, alpha: f64) -> PyResult<MeanTTest> {
        let config = TestConfig::two_sided(alpha, mu0)?;
        let inner = mean_t_test(&data, &config)?;
        Ok(MeanTTest { inner })
    }

    /// The t statistic.
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.statistic()
    }

    /// The two-sided p-value.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    /// Degrees of freedom of the t reference (n − 1).
    #[getter]
    pub fn df(&self) -> Option<f64> {
        self.inner.distribution().degrees_of_freedom()
    }

    /// Whether H₀ was rejected at the configured α.
    #[getter]
    pub fn reject(&self) -> bool {
        self.inner.reject()
    }
}

/// SignTest — Python-facing wrapper for the paired-sample sign test.
///
/// Purpose
/// -------
/// Run the sign test from Python, forwarding to [`hypothesis::sign_test`].
///
/// Parameters
/// ----------
/// Constructed from Python via `SignTest(a, b, alpha=0.05)`:
/// - `a`, `b`: paired sequences of floats, equal length ≥ 1.
/// - `alpha`: significance level in (0, 1).
///
/// Fields
/// ------
/// - `inner`: [`TestResult`]
///   Rust-side outcome backing the accessors.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "survey_inference.hypothesis_tests")]
pub struct SignTest {
    /// The sign-test result struct.
    inner: TestResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SignTest {
    #[new]
    #[pyo3(text_signature = "(a, b, /, alpha=0.05)", signature = (a, b, alpha = 0.05))]
    pub fn new(a: Vec<f64>, b: Vec<f64>, alpha: f64) -> PyResult<SignTest> {
        let inner = sign_test(&a, &b, alpha)?;
        Ok(SignTest { inner })
    }

    /// The statistic: min(n⁺, n⁻) in the exact regime, z otherwise.
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.statistic()
    }

    /// The two-sided p-value.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    /// Whether H₀ was rejected at the configured α.
    #[getter]
    pub fn reject(&self) -> bool {
        self.inner.reject()
    }
}

/// RunsTest — Python-facing wrapper for the runs test around the median.
///
/// Purpose
/// -------
/// Run the Wald–Wolfowitz randomness test from Python, forwarding to
/// [`hypothesis::runs_test_around_median`].
///
/// Parameters
/// ----------
/// Constructed from Python via `RunsTest(data, alpha=0.05)`:
/// - `data`: sequence of floats in observation order, n ≥ 2.
/// - `alpha`: significance level in (0, 1).
///
/// Fields
/// ------
/// - `inner`: [`TestResult`]
///   Rust-side outcome backing the accessors.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "survey_inference.hypothesis_tests")]
pub struct RunsTest {
    /// The runs-test result struct.
    inner: TestResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl RunsTest {
    #[new]
    #[pyo3(text_signature = "(data, /, alpha=0.05)", signature = (data, alpha = 0.05))]
    pub fn new(data: Vec<f64>, alpha: f64) -> PyResult<RunsTest> {
        let inner = runs_test_around_median(&data, alpha)?;
        Ok(RunsTest { inner })
    }

    /// The z statistic (R − E[R])/√Var[R].
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.statistic()
    }

    /// The two-sided p-value.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    /// Whether H₀ (randomness) was rejected at the configured α.
    #[getter]
    pub fn reject(&self) -> bool {
        self.inner.reject()
    }
}

/// SimpleRegression — Python-facing wrapper for the one-predictor OLS fit.
///
/// Purpose
/// -------
/// Fit Y = β₀ + β₁X from Python and expose the fitted coefficients and fit
/// summaries, forwarding to [`regression::fit_simple`].
///
/// Parameters
/// ----------
/// Constructed from Python via `SimpleRegression(x, y)`:
/// - `x`, `y`: paired sequences of floats, equal length ≥ 3.
///
/// Fields
/// ------
/// - `inner`: [`RegressionResult`]
///   Rust-side fit backing the accessors.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "survey_inference.regression")]
pub struct SimpleRegression {
    /// The fitted-model result struct.
    inner: RegressionResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SimpleRegression {
    #[new]
    #[pyo3(text_signature = "(x, y, /)")]
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> PyResult<SimpleRegression> {
        let inner = fit_simple(&x, &y)?;
        Ok(SimpleRegression { inner })
    }

    /// The fitted intercept β₀.
    #[getter]
    pub fn intercept(&self) -> f64 {
        self.inner.intercept()
    }

    /// The fitted slope β₁.
    #[getter]
    pub fn slope(&self) -> f64 {
        self.inner.slopes()[0]
    }

    /// Coefficient of determination.
    #[getter]
    pub fn r_squared(&self) -> f64 {
        self.inner.r_squared()
    }

    /// Root-mean-square error of the residuals.
    #[getter]
    pub fn rmse(&self) -> f64 {
        self.inner.rmse()
    }

    /// Per-term standard errors, `[intercept, slope]`.
    #[getter]
    pub fn std_errors(&self) -> Vec<f64> {
        self.inner.std_errors().to_vec()
    }

    /// Per-term two-sided p-values, `[intercept, slope]`.
    #[getter]
    pub fn p_values(&self) -> Vec<f64> {
        self.inner.p_values().to_vec()
    }

    /// Predict the response at a single predictor value.
    pub fn predict(&self, x: f64) -> f64 {
        self.inner.predict(&[x])
    }
}

/// _survey_inference — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_survey_inference` Python module and register its submodules
/// used by the public `survey_inference` package.
///
/// Key behaviors
/// -------------
/// - Create `hypothesis_tests` and `regression` submodules.
/// - Attach those submodules to the parent `_survey_inference` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Notes
/// -----
/// - Invoked automatically by Python when importing the compiled extension;
///   not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _survey_inference<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let hypothesis_tests_mod = PyModule::new(_py, "hypothesis_tests")?;
    let regression_mod = PyModule::new(_py, "regression")?;
    hypothesis_tests(_py, m, &hypothesis_tests_mod)?;
    regression_bindings(_py, m, &regression_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("survey_inference.hypothesis_tests", hypothesis_tests_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("survey_inference.regression", regression_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn hypothesis_tests<'py>(
    _py: Python, survey_inference: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<MeanTTest>()?;
    m.add_class::<SignTest>()?;
    m.add_class::<RunsTest>()?;
    survey_inference.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn regression_bindings<'py>(
    _py: Python, survey_inference: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<SimpleRegression>()?;
    survey_inference.add_submodule(m)?;
    Ok(())
}
