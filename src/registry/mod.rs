//! # Test Registry
//!
//! An append-only, ordered list of test cases. The order of registration is
//! the order of execution; names are labels only and may repeat.
//!
//! Bodies are plain closures. A body reports an ordinary error either by
//! panicking or, when registered with [`TestRegistry::register_fallible`], by
//! returning `Err`. Checks inside the body report through the execution
//! context, not through the return value.


use std::error::Error;

use tracing::trace;

/// Error type a fallible test body may return.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Result type of a fallible test body.
pub type TestResult = Result<(), BoxError>;

type Body<'a> = Box<dyn FnMut() -> TestResult + 'a>;

/// Index of a registered test, returned by registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestHandle(usize);

impl TestHandle {
    /// Position of the test in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A registered test and the outcome of its last run.
pub struct TestCase<'a> {
    name: String,
    body: Body<'a>,
    enabled: bool,
    invoked: bool,
    passed: bool,
}

impl std::fmt::Debug for TestCase<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("invoked", &self.invoked)
            .field("passed", &self.passed)
            .finish_non_exhaustive()
    }
}

impl<'a> TestCase<'a> {
    fn new(name: String, body: Body<'a>, enabled: bool) -> Self {
        Self {
            name,
            body,
            enabled,
            invoked: false,
            passed: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the runner has called the body.
    pub fn invoked(&self) -> bool {
        self.invoked
    }

    /// `false` once any failure was recorded for the test.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub(crate) fn run_body(&mut self) -> TestResult {
        self.invoked = true;
        (self.body)()
    }

    pub(crate) fn set_passed(&mut self, passed: bool) {
        self.passed = passed;
    }
}

/// Ordered collection of tests, filled before the run.
#[derive(Debug, Default)]
pub struct TestRegistry<'a> {
    cases: Vec<TestCase<'a>>,
}

impl<'a> TestRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an enabled test.
    pub fn register(&mut self, name: impl Into<String>, body: impl FnMut() + 'a) -> TestHandle {
        self.register_with(name, body, true)
    }

    /// Registers a test; a disabled test is counted as skipped and never run.
    pub fn register_with(
        &mut self,
        name: impl Into<String>,
        mut body: impl FnMut() + 'a,
        enabled: bool,
    ) -> TestHandle {
        self.push(
            name.into(),
            Box::new(move || {
                body();
                Ok(())
            }),
            enabled,
        )
    }

    /// Registers an enabled test whose body may return an error.
    ///
    /// An `Err` fails the test like an uncaught panic does.
    pub fn register_fallible(
        &mut self,
        name: impl Into<String>,
        body: impl FnMut() -> TestResult + 'a,
    ) -> TestHandle {
        self.push(name.into(), Box::new(body), true)
    }

    fn push(&mut self, name: String, body: Body<'a>, enabled: bool) -> TestHandle {
        let handle = TestHandle(self.cases.len());
        trace!(test = %name, index = handle.0, enabled, "test registered");
        self.cases.push(TestCase::new(name, body, enabled));
        handle
    }

    pub fn get(&self, handle: TestHandle) -> Option<&TestCase<'a>> {
        self.cases.get(handle.0)
    }

    /// Tests in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TestCase<'a>> {
        self.cases.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut TestCase<'a>> {
        self.cases.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
