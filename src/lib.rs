//! # simpletest
//!
//! A minimal unit-test harness. Tests are registered into an explicit
//! [`TestRegistry`], a [`Runner`] executes them one after another, and checks
//! inside each body are reported line by line with a final pass/fail/skip
//! summary and exit status.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::process::ExitCode;
//! use simpletest::{TestRegistry, expect_cmp, assert_cmp, expect_near, testing_main};
//!
//! fn main() -> ExitCode {
//!     let mut tests = TestRegistry::new();
//!
//!     tests.register("math::addition", || {
//!         expect_cmp!(1 + 1, ==, 2);
//!         assert_cmp!(2 * 2, >=, 4, "multiplication is broken");
//!     });
//!     tests.register("math::floats", || {
//!         expect_near!(0.1 + 0.2, 0.3, 1e-9);
//!     });
//!     tests.register_with("math::later", || {}, false);
//!
//!     testing_main(tests)
//! }
//! ```
//!
//! ## Checks
//!
//! - **Assertions** (`assert_*!`, `fail!`) are fatal: on failure the rest of
//!   the test body is skipped.
//! - **Expectations** (`expect_*!`, `add_failure!`) are non-fatal: the
//!   failure is recorded and the body continues.
//!
//! Comparisons cover the six relational operators on any ordered type, boolean
//! equivalence, byte-wise string comparison, and tolerance-based float
//! comparison through [`Nearly`]. Every operand is evaluated exactly once.
//!
//! ## Output
//!
//! Every check prints its location, verdict and both operand values; passing
//! expectations can be hidden with [`set_show_passing_expectations`].
//! Output goes through a [`Reporter`], so tests of the harness itself can
//! capture it with a [`CaptureReporter`].

mod macros;

pub mod assertion;
pub mod context;
pub mod registry;
pub mod reporter;
pub mod runner;
pub mod sentinel;
pub mod tolerance;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::process::ExitCode;

use thiserror::Error;
use tracing::error;

pub use assertion::fault::fault;
pub use assertion::{Category, Check, Location, RelOp, equate, evaluate, relate, strcmp};
pub use context::{FatalFailure, current_test};
pub use registry::{BoxError, TestCase, TestHandle, TestRegistry, TestResult};
pub use reporter::{
    CaptureReporter, ColorChoice, ConsoleReporter, NullReporter, Record, Reporter, Severity,
    set_show_passing_expectations, show_passing_expectations,
};
pub use runner::{RunSummary, Runner};
pub use sentinel::Checkpoint;
pub use tolerance::{Nearly, Tolerance, nearly_abs, nearly_rel};

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Configuration for a [`Runner`].
///
/// All fields have sensible defaults via [`HarnessConfig::default()`].
/// The configuration is validated when a runner is built.
///
/// # Example
///
/// ```rust
/// use simpletest::{ColorChoice, HarnessConfig};
///
/// let config = HarnessConfig {
///     color: ColorChoice::Never,
///     failure_exit_code: 2,
///     ..HarnessConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Whether console output is colored.
    ///
    /// Default: [`ColorChoice::Auto`].
    pub color: ColorChoice,

    /// Exit status reported when at least one test failed.
    ///
    /// Default: 1. Must be ≥ 1.
    pub failure_exit_code: u8,

    /// Length of the separator bars around each test and before the summary.
    ///
    /// Default: 19. Must be ≥ 1.
    pub bar_width: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            failure_exit_code: 1,
            bar_width: 19,
        }
    }
}

impl HarnessConfig {
    /// Validates all configuration parameters.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.failure_exit_code == 0 {
            return Err(HarnessError::InvalidConfig(
                "failure_exit_code must be >= 1".into(),
            ));
        }
        if self.bar_width == 0 {
            return Err(HarnessError::InvalidConfig(
                "bar_width must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Error type
// ------------------------------------------------------------------------------------------------

/// Errors returned while setting up a run.
///
/// Check failures are never errors: they are verdicts recorded on the test.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

// ------------------------------------------------------------------------------------------------
// Entry point
// ------------------------------------------------------------------------------------------------

/// Runs `registry` with the default configuration on stdout and returns the
/// process exit status.
pub fn testing_main(mut registry: TestRegistry<'_>) -> ExitCode {
    let config = HarnessConfig::default();
    match Runner::new(config) {
        Ok(runner) => runner.run_all(&mut registry).exit_code(runner.config()),
        Err(e) => {
            error!("cannot start test run: {e}");
            ExitCode::FAILURE
        }
    }
}
