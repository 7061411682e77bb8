//! Capture and null reporter tests, plus the visibility flag.

#[cfg(test)]
mod tests {
    use crate::reporter::{
        CaptureReporter, NullReporter, Record, Reporter, Severity, set_show_passing_expectations,
        show_passing_expectations,
    };
    use serial_test::serial;

    #[test]
    fn records_are_kept_in_order() {
        let reporter = CaptureReporter::new();
        reporter.emit(Severity::Fail, &["a".to_owned(), "b".to_owned()]);
        reporter.emit(Severity::Info, &[]);

        assert_eq!(
            reporter.records(),
            [
                Record {
                    severity: Severity::Fail,
                    parts: vec!["a".to_owned(), "b".to_owned()],
                },
                Record {
                    severity: Severity::Info,
                    parts: Vec::new(),
                },
            ]
        );
        assert_eq!(reporter.lines(), ["ab", ""]);
        assert!(reporter.contains("ab"));
        assert!(!reporter.contains("ba"));
    }

    #[test]
    fn clear_forgets_everything() {
        let reporter = CaptureReporter::new();
        reporter.emit(Severity::Pass, &["x".to_owned()]);
        reporter.clear();

        assert!(reporter.records().is_empty());
    }

    #[test]
    fn capture_is_shareable_across_threads() {
        let reporter = std::sync::Arc::new(CaptureReporter::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let reporter = reporter.clone();
                std::thread::spawn(move || reporter.emit(Severity::Info, &[i.to_string()]))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut lines = reporter.lines();
        lines.sort();
        assert_eq!(lines, ["0", "1", "2", "3"]);
    }

    #[test]
    fn null_reporter_accepts_anything() {
        let reporter: &dyn Reporter = &NullReporter;
        reporter.emit(Severity::Fail, &["ignored".to_owned()]);
    }

    #[test]
    #[serial]
    fn visibility_flag_toggles() {
        assert!(show_passing_expectations());
        set_show_passing_expectations(false);
        assert!(!show_passing_expectations());
        set_show_passing_expectations(true);
        assert!(show_passing_expectations());
    }
}
