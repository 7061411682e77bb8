//! # Reporter Module
//!
//! The narrow output seam of the harness. Everything the runner and the
//! assertion engine print goes through [`Reporter::emit`] as one record: a
//! [`Severity`] tag plus an ordered list of already-rendered strings. The
//! reporter only joins the parts; it never formats values itself.
//!
//! ## Implementations
//!
//! - [`ConsoleReporter`] writes one line per record to any `io::Write`
//!   (stdout by default), optionally colored by severity.
//! - [`CaptureReporter`] keeps every [`Record`] in memory for inspection.
//! - [`NullReporter`] discards everything.
//!
//! ## Visibility of passing expectations
//!
//! Passing non-fatal checks can be noisy. The process-wide flag toggled by
//! [`set_show_passing_expectations`] hides them. It is read each time a
//! passing expectation is about to be printed, so a toggle takes effect
//! immediately, even in the middle of a test. Failures are never hidden.

#[cfg(test)]
mod tests;

use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use colored::Color;
use tracing::error;

// ------------------------------------------------------------------------------------------------
// Severity
// ------------------------------------------------------------------------------------------------

/// Severity tag attached to every emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress and decoration (test start, separators, blank lines).
    Info,
    /// Something succeeded.
    Pass,
    /// A fatal failure, an uncaught error, or a failed test.
    Fail,
    /// A non-fatal failure.
    Warn,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Severity::Info => Color::Blue,
            Severity::Pass => Color::Green,
            Severity::Fail => Color::Red,
            Severity::Warn => Color::Yellow,
        }
    }
}

/// Whether a [`ConsoleReporter`] decorates its output with ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the current stdout.
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Auto => io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Reporter trait
// ------------------------------------------------------------------------------------------------

/// A sink for severity-tagged lines.
///
/// Implementations must be shareable: the runner hands the same reporter to
/// every test through the execution context.
pub trait Reporter: Send + Sync {
    /// Emits one record. `parts` are concatenated in order to form the line.
    fn emit(&self, severity: Severity, parts: &[String]);
}

/// Convenience for emitting a single pre-rendered string.
pub(crate) fn emit_line(reporter: &dyn Reporter, severity: Severity, line: impl Into<String>) {
    reporter.emit(severity, &[line.into()]);
}

// ------------------------------------------------------------------------------------------------
// Visibility flag
// ------------------------------------------------------------------------------------------------

static SHOW_PASSING_EXPECTATIONS: AtomicBool = AtomicBool::new(true);

/// Shows or hides passing non-fatal checks from now on.
pub fn set_show_passing_expectations(show: bool) {
    SHOW_PASSING_EXPECTATIONS.store(show, Ordering::Relaxed);
}

/// Current value of the visibility flag (default: `true`).
pub fn show_passing_expectations() -> bool {
    SHOW_PASSING_EXPECTATIONS.load(Ordering::Relaxed)
}

// ------------------------------------------------------------------------------------------------
// Console reporter
// ------------------------------------------------------------------------------------------------

/// Writes each record as one line, colored by severity when enabled.
pub struct ConsoleReporter<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    colorize: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// A reporter writing to the process stdout.
    pub fn stdout(color: ColorChoice) -> Self {
        Self::new(io::stdout(), color.should_colorize())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Wraps an arbitrary writer. `colorize` alone decides whether lines
    /// carry ANSI color codes.
    pub fn new(out: W, colorize: bool) -> Self {
        Self {
            out: Mutex::new(out),
            colorize,
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn emit(&self, severity: Severity, parts: &[String]) {
        let line = parts.concat();
        let mut out = self.lock();
        // `colored`'s global switch tracks stdout, not `out`.
        let result = if self.colorize && !line.is_empty() {
            writeln!(out, "\x1b[{}m{line}\x1b[0m", severity.color().to_fg_str())
        } else {
            writeln!(out, "{line}")
        };
        if let Err(e) = result.and_then(|()| out.flush()) {
            error!("reporter write failed: {e}");
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Capture reporter
// ------------------------------------------------------------------------------------------------

/// One captured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub parts: Vec<String>,
}

impl Record {
    /// The line as it would be printed.
    pub fn text(&self) -> String {
        self.parts.concat()
    }
}

/// Keeps every emitted record in memory.
#[derive(Debug, Default)]
pub struct CaptureReporter {
    records: Mutex<Vec<Record>>,
}

impl CaptureReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records emitted so far.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Text of all records emitted so far, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(Record::text).collect()
    }

    /// Returns `true` if any emitted line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().iter().any(|r| r.text().contains(needle))
    }

    /// Drops everything captured so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Reporter for CaptureReporter {
    fn emit(&self, severity: Severity, parts: &[String]) {
        self.lock().push(Record {
            severity,
            parts: parts.to_vec(),
        });
    }
}

// ------------------------------------------------------------------------------------------------
// Null reporter
// ------------------------------------------------------------------------------------------------

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn emit(&self, _severity: Severity, _parts: &[String]) {}
}
