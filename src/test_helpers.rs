//! Helpers shared by the unit tests of every module.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::context::{ContextGuard, FatalFailure};
use crate::reporter::{CaptureReporter, Severity};

/// Initialize tracing subscriber controlled by `RUST_LOG` env var.
/// Only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Result of running a closure inside a throwaway test context.
pub struct Probe {
    /// Verdict recorded in the context.
    pub passed: bool,
    /// Whether the closure was left through the fatal-failure signal.
    pub aborted: bool,
    pub reporter: Arc<CaptureReporter>,
}

impl Probe {
    pub fn lines(&self) -> Vec<String> {
        self.reporter.lines()
    }

    /// Severities of all non-blank records.
    pub fn severities(&self) -> Vec<Severity> {
        self.reporter
            .records()
            .into_iter()
            .filter(|r| !r.parts.is_empty())
            .map(|r| r.severity)
            .collect()
    }
}

/// Runs `body` as if it were a test body, capturing everything it reports.
///
/// Panics other than the fatal-failure signal are propagated.
pub fn probe(body: impl FnOnce()) -> Probe {
    init_tracing();
    let reporter = Arc::new(CaptureReporter::new());
    let guard = ContextGuard::enter("probe", reporter.clone());

    let aborted = match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(()) => false,
        Err(payload) if FatalFailure::is_signal(payload.as_ref()) => true,
        Err(payload) => panic::resume_unwind(payload),
    };

    let passed = guard.finish();
    Probe {
        passed,
        aborted,
        reporter,
    }
}
