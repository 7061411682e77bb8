//! Explicit failures: a check that fails unconditionally, with an optional
//! message. Always printed, at fail severity, whatever the category.

use super::{Category, Location, fail_current};
use crate::context;
use crate::reporter::Severity;

/// Records an explicit failure into the current test.
///
/// A fatal fault leaves the test body and does not return.
pub fn fault(location: Location, fatal: bool, message: Option<String>) {
    let reporter = context::reporter();

    reporter.emit(Severity::Fail, &[location.to_string()]);
    reporter.emit(Severity::Fail, &["  explicitly failed".to_owned()]);
    if let Some(message) = message {
        reporter.emit(Severity::Fail, &["    ".to_owned(), message]);
    }
    reporter.emit(Severity::Fail, &[]);

    fail_current(location, Category::from_fatal(fatal));
}
