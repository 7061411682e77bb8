//! Mirrored-operand tests: every relation must hold with the interval on
//! either side of the operator.

#[cfg(test)]
mod tests {
    use crate::tolerance::nearly_abs;
    use std::cmp::Ordering;

    const PROBES: [f64; 9] = [
        123.2, 123.299, 123.3, 123.4, 123.456, 123.5, 123.501, 123.6, 1.0e9,
    ];

    #[test]
    fn mirrored_relations_agree() {
        for center in [123.3, 123.4, 123.5, 123.6] {
            let n = nearly_abs(center, 0.1);
            for x in PROBES {
                assert_eq!(x == n, n == x, "== center={center} x={x}");
                assert_eq!(x != n, n != x, "!= center={center} x={x}");
                assert_eq!(x < n, n > x, "< center={center} x={x}");
                assert_eq!(x > n, n < x, "> center={center} x={x}");
                assert_eq!(x <= n, n >= x, "<= center={center} x={x}");
                assert_eq!(x >= n, n <= x, ">= center={center} x={x}");
            }
        }
    }

    /// # Scenario
    /// The explicit interval comparisons with the probe on the left.
    ///
    /// # Expected behavior
    /// `123.456` sits inside `123.4 ± 0.1` and `123.5 ± 0.1`, strictly
    /// below `123.6 ± 0.1` and strictly above `123.3 ± 0.1`.
    #[test]
    fn probe_on_the_left() {
        let x = 123.456;

        assert!(x == nearly_abs(123.4, 0.1));
        assert!(x == nearly_abs(123.5, 0.1));

        assert!(x < nearly_abs(123.6, 0.1));
        assert!(x > nearly_abs(123.3, 0.1));

        assert!(x <= nearly_abs(123.4, 0.1));
        assert!(x >= nearly_abs(123.5, 0.1));
    }

    #[test]
    fn partial_cmp_is_reversed_for_probe_on_the_left() {
        let n = nearly_abs(0.0, 1.0);

        assert_eq!(n.partial_cmp(&5.0), Some(Ordering::Less));
        assert_eq!(5.0_f64.partial_cmp(&n), Some(Ordering::Greater));
        assert_eq!(n.partial_cmp(&0.5), Some(Ordering::Equal));
        assert_eq!(0.5_f64.partial_cmp(&n), Some(Ordering::Equal));
    }
}
