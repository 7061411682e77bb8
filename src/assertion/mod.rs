//! # Assertion Engine
//!
//! Evaluates one binary check, prints its verdict through the current
//! test's reporter, and records failures into the current test.
//!
//! A check is either an **assertion** (fatal: a failure aborts the test
//! body via the fatal-failure signal) or an **expectation** (non-fatal: the
//! failure is recorded and the body keeps running).
//!
//! ## Output
//!
//! Each reported check is five records, in this order:
//!
//! ```text
//! src/lib.rs:42
//!   expectation failed: a == b
//!     left : 123
//!     right: 456
//!
//! ```
//!
//! An optional message is printed after the `right` line. Passing
//! expectations are omitted while
//! [`show_passing_expectations`](crate::reporter::show_passing_expectations)
//! is off; everything else is always printed.
//!
//! ## Operators
//!
//! Relational operators are the [`RelOp`] enum and one comparator,
//! [`RelOp::holds`], that maps the outcome of a comparison onto the
//! operator. Equality-only types produce their outcome with [`equate`],
//! ordered types with [`relate`], byte strings with [`strcmp`].

pub mod fault;


use std::cmp::Ordering;
use std::fmt;

use tracing::warn;

use crate::context;
use crate::reporter::{Severity, show_passing_expectations};

// ------------------------------------------------------------------------------------------------
// Relational operators
// ------------------------------------------------------------------------------------------------

/// Relational operator applied by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl RelOp {
    /// Decides whether the operator holds for the outcome of comparing the
    /// left operand with the right one. `None` means unordered (e.g. NaN,
    /// or "not equal" for equality-only types).
    pub fn holds(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (RelOp::Ne, ordering) => ordering != Some(Ordering::Equal),
            (_, None) => false,
            (RelOp::Eq, Some(o)) => o == Ordering::Equal,
            (RelOp::Lt, Some(o)) => o == Ordering::Less,
            (RelOp::Gt, Some(o)) => o == Ordering::Greater,
            (RelOp::Le, Some(o)) => o != Ordering::Greater,
            (RelOp::Ge, Some(o)) => o != Ordering::Less,
        }
    }

    /// Source token of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "==",
            RelOp::Ne => "!=",
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Le => "<=",
            RelOp::Ge => ">=",
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to operands that are only equality-comparable.
///
/// Only [`RelOp::Eq`] and [`RelOp::Ne`] can hold; ordering operators are
/// always false because no ordering exists.
pub fn equate<L, R>(op: RelOp, lhs: &L, rhs: &R) -> bool
where
    L: PartialEq<R> + ?Sized,
    R: ?Sized,
{
    op.holds((lhs == rhs).then_some(Ordering::Equal))
}

/// Applies `op` to ordered operands.
pub fn relate<L, R>(op: RelOp, lhs: &L, rhs: &R) -> bool
where
    L: PartialOrd<R> + ?Sized,
    R: ?Sized,
{
    match op {
        // Go through `PartialEq` so types whose `==` is not derived from
        // `partial_cmp` keep their own semantics.
        RelOp::Eq | RelOp::Ne => equate(op, lhs, rhs),
        _ => op.holds(lhs.partial_cmp(rhs)),
    }
}

/// Tri-state byte-wise comparison over the full content of both strings.
///
/// Embedded NUL bytes are ordinary bytes: `"a\0b"` and `"a\0c"` differ.
pub fn strcmp(lhs: impl AsRef<[u8]>, rhs: impl AsRef<[u8]>) -> Ordering {
    lhs.as_ref().cmp(rhs.as_ref())
}

// ------------------------------------------------------------------------------------------------
// Check description
// ------------------------------------------------------------------------------------------------

/// Source location of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Fatal or non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Fatal: a failure aborts the test body.
    Assertion,
    /// Non-fatal: a failure is recorded, the body continues.
    Expectation,
}

impl Category {
    pub fn from_fatal(fatal: bool) -> Self {
        if fatal {
            Category::Assertion
        } else {
            Category::Expectation
        }
    }

    pub fn is_fatal(self) -> bool {
        self == Category::Assertion
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Assertion => "assertion",
            Category::Expectation => "expectation",
        }
    }

    fn failure_severity(self) -> Severity {
        match self {
            Category::Assertion => Severity::Fail,
            Category::Expectation => Severity::Warn,
        }
    }
}

/// Everything about a check except the operand values.
#[derive(Debug, Clone)]
pub struct Check<'a> {
    pub location: Location,
    pub category: Category,
    pub lhs_expr: &'a str,
    pub rhs_expr: &'a str,
    /// Operator as shown in the verdict line (`==`, `is`, `[strcmp]<`, ...).
    pub operator: &'a str,
    pub message: Option<String>,
}

// ------------------------------------------------------------------------------------------------
// Evaluation
// ------------------------------------------------------------------------------------------------

/// Evaluates `predicate(lhs, rhs)` once, reports the verdict and records a
/// failure into the current test.
///
/// Returns the verdict for a non-fatal check. A failed fatal check does not
/// return: it raises the fatal-failure signal (or panics when no test is
/// running).
pub fn evaluate<L, R, P>(check: Check<'_>, lhs: &L, rhs: &R, predicate: P) -> bool
where
    L: fmt::Debug + ?Sized,
    R: fmt::Debug + ?Sized,
    P: FnOnce(&L, &R) -> bool,
{
    let passed = predicate(lhs, rhs);

    let visible = !passed || check.category.is_fatal() || show_passing_expectations();
    if visible {
        let severity = if passed {
            Severity::Pass
        } else {
            check.category.failure_severity()
        };
        render(&check, severity, passed, &format!("{lhs:?}"), &format!("{rhs:?}"));
    }

    if passed {
        return true;
    }
    fail_current(check.location, check.category);
    false
}

fn render(check: &Check<'_>, severity: Severity, passed: bool, lhs: &str, rhs: &str) {
    let reporter = context::reporter();
    let verdict = if passed { "passed" } else { "failed" };

    reporter.emit(severity, &[check.location.to_string()]);
    reporter.emit(
        severity,
        &[
            "  ".to_owned(),
            check.category.as_str().to_owned(),
            format!(" {verdict}: "),
            check.lhs_expr.to_owned(),
            format!(" {} ", check.operator),
            check.rhs_expr.to_owned(),
        ],
    );
    reporter.emit(severity, &["    left : ".to_owned(), lhs.to_owned()]);
    reporter.emit(severity, &["    right: ".to_owned(), rhs.to_owned()]);
    if let Some(message) = &check.message {
        reporter.emit(severity, &["    ".to_owned(), message.clone()]);
    }
    reporter.emit(severity, &[]);
}

/// Records a failure into the current test and, for fatal categories,
/// leaves the test body.
pub(crate) fn fail_current(location: Location, category: Category) {
    let inside_test = context::mark_failed();
    if !inside_test {
        warn!(%location, category = category.as_str(), "check failed outside of a running test");
    }

    if category.is_fatal() {
        if inside_test {
            context::raise_fatal();
        }
        panic!("{} failed at {location} outside of a running test", category.as_str());
    }
}
