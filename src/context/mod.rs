//! # Execution Context
//!
//! Tracks which test is running on the current thread so that checks can be
//! written as free-standing calls without passing a handle around.
//!
//! The slot is thread-local and can only be filled through a
//! [`ContextGuard`], which the runner acquires for exactly one test body.
//! Dropping the guard restores whatever the slot held before, so a test may
//! itself run a nested suite and the outer test resumes afterwards.
//!
//! ## Fatal-failure signal
//!
//! A failed fatal check must stop the body immediately. This is done by
//! unwinding with a [`FatalFailure`] payload through
//! [`std::panic::resume_unwind`], which bypasses the panic hook (the failure
//! has already been reported). The payload type has no public constructor
//! and is only ever recognised by the runner; ordinary errors never travel
//! this way.


use std::cell::RefCell;
use std::panic;
use std::sync::{Arc, OnceLock};

use crate::reporter::{ColorChoice, ConsoleReporter, Reporter};

// ------------------------------------------------------------------------------------------------
// Fatal-failure signal
// ------------------------------------------------------------------------------------------------

/// Unwind payload used to abort the current test body after a fatal check
/// failed. Carries no diagnostic: the failure was printed before unwinding.
#[derive(Debug)]
pub struct FatalFailure {
    _private: (),
}

impl FatalFailure {
    /// Returns `true` if the unwind payload is the fatal-failure signal.
    pub fn is_signal(payload: &(dyn std::any::Any + Send)) -> bool {
        payload.is::<FatalFailure>()
    }
}

/// Unwinds out of the current test body.
pub(crate) fn raise_fatal() -> ! {
    panic::resume_unwind(Box::new(FatalFailure { _private: () }))
}

// ------------------------------------------------------------------------------------------------
// Current-test slot
// ------------------------------------------------------------------------------------------------

/// State of the test currently running on this thread.
struct ActiveTest {
    name: String,
    passed: bool,
    reporter: Arc<dyn Reporter>,
}

thread_local! {
    static CURRENT: RefCell<Option<ActiveTest>> = const { RefCell::new(None) };
}

/// Scoped ownership of the current-test slot.
///
/// While the guard lives, checks on this thread report into its test.
pub struct ContextGuard {
    previous: Option<ActiveTest>,
}

impl ContextGuard {
    /// Makes `name` the current test. The test starts as passed.
    pub(crate) fn enter(name: &str, reporter: Arc<dyn Reporter>) -> Self {
        let active = ActiveTest {
            name: name.to_owned(),
            passed: true,
            reporter,
        };
        let previous = CURRENT.with(|slot| slot.borrow_mut().replace(active));
        Self { previous }
    }

    /// Whether no failure has been recorded for this test so far.
    pub fn passed(&self) -> bool {
        CURRENT.with(|slot| slot.borrow().as_ref().is_some_and(|t| t.passed))
    }

    /// Leaves the context and returns the final verdict.
    pub(crate) fn finish(self) -> bool {
        self.passed()
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Name of the test currently running on this thread, if any.
pub fn current_test() -> Option<String> {
    CURRENT.with(|slot| slot.borrow().as_ref().map(|t| t.name.clone()))
}

/// Marks the current test as failed.
///
/// Returns `false` when no test is running.
pub(crate) fn mark_failed() -> bool {
    CURRENT.with(|slot| match slot.borrow_mut().as_mut() {
        Some(test) => {
            test.passed = false;
            true
        }
        None => false,
    })
}

/// Reporter of the current test, or a shared stdout reporter when checks are
/// evaluated outside of a run.
pub(crate) fn reporter() -> Arc<dyn Reporter> {
    static FALLBACK: OnceLock<Arc<dyn Reporter>> = OnceLock::new();

    CURRENT
        .with(|slot| slot.borrow().as_ref().map(|t| Arc::clone(&t.reporter)))
        .unwrap_or_else(|| {
            Arc::clone(FALLBACK.get_or_init(|| Arc::new(ConsoleReporter::stdout(ColorChoice::Auto))))
        })
}
