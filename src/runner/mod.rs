//! # Runner
//!
//! Walks a [`TestRegistry`] in registration order and runs every enabled
//! test in isolation:
//!
//! 1. A disabled test is counted as skipped. Nothing is printed for it.
//! 2. An enabled test gets a fresh execution context (it starts as passed),
//!    a `running...` header, and its body is called inside
//!    [`std::panic::catch_unwind`].
//! 3. The unwind outcome is classified:
//!    - the fatal-failure signal: the failure was already recorded and
//!      printed, nothing more to do;
//!    - any other panic, or an `Err` from a fallible body: the test fails
//!      and the error message is printed;
//!    - normal return: the verdict is whatever the checks recorded.
//! 4. The context is left, the verdict is stored on the test case and a
//!    `PASSED` / `FAILED` trailer is printed.
//!
//! After the last test the non-zero counts are printed. A run succeeds when
//! no test failed; skipped tests never affect success.
//!
//! A test that never returns blocks the run; there is no timeout.


use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, info};

use crate::context::{ContextGuard, FatalFailure};
use crate::registry::{TestCase, TestRegistry};
use crate::reporter::{ConsoleReporter, Reporter, Severity, emit_line};
use crate::{HarnessConfig, HarnessError};

// ------------------------------------------------------------------------------------------------
// Run summary
// ------------------------------------------------------------------------------------------------

/// Counts of a finished run. Computed once by [`Runner::run_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    passed: usize,
    failed: usize,
    skipped: usize,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// `true` when no test failed.
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    /// Number of registered tests, run or skipped.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Process exit status for this run.
    pub fn exit_code(&self, config: &HarnessConfig) -> ExitCode {
        if self.success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(config.failure_exit_code)
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Runner
// ------------------------------------------------------------------------------------------------

/// Sequential test runner.
pub struct Runner {
    config: HarnessConfig,
    reporter: Arc<dyn Reporter>,
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Runner {
    /// A runner printing to stdout.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if the configuration is out of
    /// range.
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        let reporter = Arc::new(ConsoleReporter::stdout(config.color));
        Self::with_reporter(config, reporter)
    }

    /// A runner printing to the given reporter.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if the configuration is out of
    /// range.
    pub fn with_reporter(
        config: HarnessConfig,
        reporter: Arc<dyn Reporter>,
    ) -> Result<Self, HarnessError> {
        config.validate()?;
        Ok(Self { config, reporter })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs every test of `registry` in registration order.
    ///
    /// Outcomes are stored on the test cases; the counts are returned.
    pub fn run_all(&self, registry: &mut TestRegistry<'_>) -> RunSummary {
        info!(tests = registry.len(), "run started");
        let mut summary = RunSummary::default();

        for case in registry.iter_mut() {
            if !case.is_enabled() {
                debug!(test = %case.name(), "test skipped");
                summary.skipped += 1;
                continue;
            }

            if self.run_one(case) {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
        }

        self.print_summary(&summary);
        info!(
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            "run finished"
        );
        summary
    }

    fn run_one(&self, case: &mut TestCase<'_>) -> bool {
        let reporter = self.reporter.as_ref();
        let name = case.name().to_owned();

        debug!(test = %name, "test started");
        reporter.emit(Severity::Info, &[name.clone(), " running...".to_owned()]);
        emit_line(reporter, Severity::Info, self.bar('-'));

        let guard = ContextGuard::enter(&name, Arc::clone(&self.reporter));
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| case.run_body()));

        let uncaught = match outcome {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(Some(e.to_string())),
            Err(payload) if FatalFailure::is_signal(payload.as_ref()) => None,
            Err(payload) => Some(panic_message(payload.as_ref())),
        };
        if let Some(message) = &uncaught {
            let mut parts = vec![name.clone(), " raised an exception".to_owned()];
            if let Some(message) = message {
                parts.push(format!(": {message}"));
            }
            reporter.emit(Severity::Fail, &parts);
        }

        let passed = guard.finish() && uncaught.is_none();
        case.set_passed(passed);
        debug!(test = %name, passed, "test finished");

        let (severity, verdict) = if passed {
            (Severity::Pass, " PASSED")
        } else {
            (Severity::Fail, " FAILED")
        };
        emit_line(reporter, severity, self.bar('-'));
        reporter.emit(severity, &[name, verdict.to_owned()]);
        reporter.emit(Severity::Info, &[]);

        passed
    }

    fn print_summary(&self, summary: &RunSummary) {
        let reporter = self.reporter.as_ref();
        emit_line(reporter, Severity::Info, self.bar('='));

        let counts = [
            (summary.passed, Severity::Pass, "passed: "),
            (summary.failed, Severity::Fail, "failed: "),
            (summary.skipped, Severity::Info, "skipped: "),
        ];
        for (count, severity, label) in counts {
            if count > 0 {
                reporter.emit(severity, &[label.to_owned(), count.to_string()]);
            }
        }
    }

    fn bar(&self, c: char) -> String {
        std::iter::repeat_n(c, self.config.bar_width).collect()
    }
}

/// Extracts the message of a panic payload, if it carries a string.
fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        Some((*s).to_owned())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}
