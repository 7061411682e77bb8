//! The harness testing itself.
//!
//! Built with `harness = false`: this file is a plain program whose `main`
//! hands a registry to [`simpletest::testing_main`]. Every test here must
//! pass. Suites that are expected to fail are run nested, into a capture
//! reporter, and their transcripts are checked from the outer test.
//!
//! ```bash
//! cargo test --test selftest
//! ```

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use simpletest::*;

// ------------------------------------------------------------------------------------------------
// Helpers
// ------------------------------------------------------------------------------------------------

/// Runs a nested suite quietly and returns its summary and transcript.
fn run_nested(registry: &mut TestRegistry<'_>) -> (RunSummary, Arc<CaptureReporter>) {
    let capture = Arc::new(CaptureReporter::new());
    let config = HarnessConfig {
        color: ColorChoice::Never,
        ..HarnessConfig::default()
    };
    match Runner::with_reporter(config, capture.clone()) {
        Ok(runner) => (runner.run_all(registry), capture),
        Err(e) => panic!("{e}"),
    }
}

static LIVE_VALUE: AtomicI32 = AtomicI32::new(TRASH);
const TRASH: i32 = 123_456_789;

/// Publishes a value for as long as it is alive.
struct Scoped(i32);

impl Scoped {
    fn new(x: i32) -> Self {
        LIVE_VALUE.store(x, Ordering::SeqCst);
        Self(x)
    }

    fn value(&self) -> &i32 {
        &self.0
    }
}

impl Drop for Scoped {
    fn drop(&mut self) {
        LIVE_VALUE.store(TRASH, Ordering::SeqCst);
    }
}

// ------------------------------------------------------------------------------------------------
// Passing suite
// ------------------------------------------------------------------------------------------------

fn register_passing(tests: &mut TestRegistry<'_>) {
    tests.register("selftest::some_correct", || {
        let h1 = String::from("hello");
        let h2 = String::from("hello");
        expect_cmp!(h1.as_ptr(), !=, h2.as_ptr());
        expect_strcmp!(h1, ==, h2);
        expect_strcmp!("hello", <, "world");
        expect_strcmp!("hello\0one", !=, "hello\0two");
    });

    tests.register("selftest::do_not_eval_twice", || {
        let mut counter = 0;
        let mut post_inc = || {
            counter += 1;
            counter - 1
        };
        assert_cmp!(post_inc(), ==, 0);
        assert_cmp!(post_inc(), ==, 1);
        assert_cmp!(2, ==, post_inc());
        assert_cmp!(counter, ==, 3);
    });

    tests.register("selftest::temporaries_outlive_the_check", || {
        expect_cmp!(Scoped::new(123).value(), ==, &123);
        expect_cmp!(LIVE_VALUE.load(Ordering::SeqCst), ==, TRASH);
    });

    tests.register("selftest::compare_floats_explicitly", || {
        expect_cmp!(123.456, ==, nearly_abs(123.4, 0.1));
        expect_cmp!(123.456, ==, nearly_abs(123.5, 0.1));
        expect_cmp!(123.456, <, nearly_abs(123.6, 0.1));
        expect_cmp!(123.456, >, nearly_abs(123.3, 0.1));
        expect_cmp!(123.456, <=, nearly_abs(123.4, 0.1));
        expect_cmp!(123.456, >=, nearly_abs(123.5, 0.1));
    });

    tests.register("selftest::compare_floats_implicitly", || {
        let pivot = 123.4;
        let epsilon = 0.1;
        let tiny = 0.001;

        expect_floatcmp!(pivot, ==, pivot - epsilon, epsilon);
        expect_floatcmp!(pivot, ==, pivot + epsilon, epsilon);
        expect_floatcmp!(pivot, !=, pivot - epsilon - tiny, epsilon);
        expect_floatcmp!(pivot, !=, pivot + epsilon + tiny, epsilon);
        expect_floatcmp!(pivot, >, pivot - epsilon - tiny, epsilon);
        expect_floatcmp!(pivot, <, pivot + epsilon + tiny, epsilon);
        expect_floatcmp!(pivot, <=, pivot - epsilon, epsilon);
        expect_floatcmp!(pivot, >=, pivot + epsilon, epsilon);
    });

    tests.register("selftest::shorthands", || {
        expect_eq!(123, 123);
        expect_ne!("aaa", "bbb");
        expect_strne!("aaa\0bbb", "aaa\0ccc");
        expect_true!(1 == 1);
        expect_false!(1 == 2);
        expect_near!(123.4, 123.45, 0.1);
        assert_le!(1, 1);
    });

    tests.register("selftest::checkpoint", || {
        let checkpoint = reachable!();
        expect_cmp!(current_test().as_deref(), ==, Some("selftest::checkpoint"));
        checkpoint.reached();
    });

    tests.register_with("selftest::disabled", || unreachable_code!(), false);
}

// ------------------------------------------------------------------------------------------------
// Failing suites, checked from the outside
// ------------------------------------------------------------------------------------------------

fn register_failure_checks(tests: &mut TestRegistry<'_>) {
    tests.register("selftest::failures_are_reported", || {
        let reached = std::cell::Cell::new(false);
        let mut suite = TestRegistry::new();
        suite.register("vector_capacity", || {
            let mut xs: Vec<i32> = Vec::with_capacity(100_500);
            xs.clear();
            expect_cmp!(xs.capacity(), ==, 0, " ahaha ? ahaha!");
            assert_cmp!(xs.len(), ==, 1, " ahaha ? ahaha!");
            reached.set(true);
        });
        suite.register("lots_of_failed_expectations", || {
            expect_cmp!(123, ==, 456);
            expect_bool!(true, false);
            expect_strcmp!("hello", >, "world");
            expect_strcmp!("hello\0one", ==, "hello\0two");
        });
        suite.register("some_assertion_failed", || {
            assert_cmp!(123, ==, 456);
            reached.set(true);
        });
        suite.register("raised_exception", || panic!("ooo"));
        suite.register_with("some_disabled", || reached.set(true), false);
        suite.register("some_fault", || {
            assertion_fault!("comment {} goes here", 123);
            reached.set(true);
        });

        let (summary, capture) = run_nested(&mut suite);

        assert_cmp!(summary.passed(), ==, 0);
        assert_cmp!(summary.failed(), ==, 5);
        assert_cmp!(summary.skipped(), ==, 1);
        expect_false!(reached.get());

        expect_true!(capture.contains("  expectation failed: xs.capacity() == 0"));
        expect_true!(capture.contains("    right: 0"));
        expect_true!(capture.contains("  assertion failed: xs.len() == 1"));
        expect_true!(capture.contains("     ahaha ? ahaha!"));
        expect_true!(capture.contains("  expectation failed: true is false"));
        expect_true!(capture.contains("[strcmp]>"));
        expect_true!(capture.contains("raised_exception raised an exception: ooo"));
        expect_true!(capture.contains("    comment 123 goes here"));
        expect_false!(capture.contains("some_disabled"));

        let lines = capture.lines();
        expect_eq!(lines[lines.len() - 3], "=".repeat(19));
        expect_eq!(lines[lines.len() - 2..].to_vec(), ["failed: 5", "skipped: 1"]);
    });

    tests.register("selftest::hidden_passing_expectations", || {
        let mut suite = TestRegistry::new();
        suite.register("quiet", || {
            expect_cmp!(1, ==, 1);
            assert_cmp!(2, ==, 2);
        });

        set_show_passing_expectations(false);
        let (summary, capture) = run_nested(&mut suite);
        set_show_passing_expectations(true);

        expect_true!(summary.success());
        expect_false!(capture.contains("expectation passed"));
        expect_true!(capture.contains("  assertion passed: 2 == 2"));
    });
}

fn main() -> ExitCode {
    let mut tests = TestRegistry::new();
    register_passing(&mut tests);
    register_failure_checks(&mut tests);
    testing_main(tests)
}
