//! # Tolerance Comparator
//!
//! [`Nearly`] describes the closed interval `[center - epsilon, center + epsilon]`
//! and orders it against a single probe value:
//!
//! | Expression      | Holds when                     |
//! |-----------------|--------------------------------|
//! | `nearly == x`   | `center - eps <= x <= center + eps` |
//! | `nearly != x`   | negation of `==`               |
//! | `nearly <  x`   | `center + eps < x`             |
//! | `nearly >  x`   | `x < center - eps`             |
//! | `nearly <= x`   | `center - eps <= x`            |
//! | `nearly >= x`   | `x <= center + eps`            |
//!
//! Every relation also holds with the interval on the right-hand side,
//! mirrored (`x < nearly` is `nearly > x`). A `NaN` on either side is
//! unordered: every relation is false except `!=`.
//!
//! All six relations fall out of a single [`PartialOrd`] implementation:
//! an interval lying wholly below the probe is `Less`, one containing it is
//! `Equal`, one lying wholly above it is `Greater`.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;

/// A floating-point value with an absolute tolerance.
///
/// `Debug` renders the same `center ± epsilon` form as `Display`, so the
/// interval reads naturally in assertion output.
#[derive(Clone, Copy)]
pub struct Nearly<F> {
    /// Middle of the interval.
    pub center: F,
    /// Half-width of the interval, never negative.
    pub epsilon: F,
}

/// Builds an interval of absolute half-width `|epsilon|` around `center`.
pub fn nearly_abs<F: Tolerance>(center: F, epsilon: F) -> Nearly<F> {
    Nearly {
        center,
        epsilon: epsilon.magnitude(),
    }
}

/// Builds an interval whose half-width is `center * relative` (taken absolute).
pub fn nearly_rel<F: Tolerance>(center: F, relative: F) -> Nearly<F> {
    nearly_abs(center, center.scale(relative))
}

/// Floating-point types usable as the center of a [`Nearly`] interval.
pub trait Tolerance: Copy + PartialOrd + fmt::Display {
    /// Absolute value.
    fn magnitude(self) -> Self;
    /// Product of `self` and `factor`.
    fn scale(self, factor: Self) -> Self;
    /// `self - other`.
    fn minus(self, other: Self) -> Self;
    /// `self + other`.
    fn plus(self, other: Self) -> Self;
}

impl<F: Tolerance> Nearly<F> {
    /// Lower bound of the interval.
    pub fn lower(&self) -> F {
        self.center.minus(self.epsilon)
    }

    /// Upper bound of the interval.
    pub fn upper(&self) -> F {
        self.center.plus(self.epsilon)
    }

    /// Returns `true` if `x` lies inside the closed interval.
    pub fn contains(&self, x: F) -> bool {
        self.lower() <= x && x <= self.upper()
    }

    /// Orders the interval against the probe `x`.
    ///
    /// `None` when any bound or the probe is NaN.
    pub fn position(&self, x: F) -> Option<Ordering> {
        if self.upper() < x {
            Some(Ordering::Less)
        } else if x < self.lower() {
            Some(Ordering::Greater)
        } else if self.contains(x) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

impl<F: Tolerance> fmt::Display for Nearly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.center, self.epsilon)
    }
}

impl<F: Tolerance> fmt::Debug for Nearly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_tolerance {
    ($($float:ty),*) => {$(
        impl Tolerance for $float {
            fn magnitude(self) -> Self {
                self.abs()
            }
            fn scale(self, factor: Self) -> Self {
                self * factor
            }
            fn minus(self, other: Self) -> Self {
                self - other
            }
            fn plus(self, other: Self) -> Self {
                self + other
            }
        }

        impl PartialEq<$float> for Nearly<$float> {
            fn eq(&self, x: &$float) -> bool {
                self.contains(*x)
            }
        }

        impl PartialOrd<$float> for Nearly<$float> {
            fn partial_cmp(&self, x: &$float) -> Option<Ordering> {
                self.position(*x)
            }
        }

        impl PartialEq<Nearly<$float>> for $float {
            fn eq(&self, interval: &Nearly<$float>) -> bool {
                interval.contains(*self)
            }
        }

        impl PartialOrd<Nearly<$float>> for $float {
            fn partial_cmp(&self, interval: &Nearly<$float>) -> Option<Ordering> {
                interval.position(*self).map(Ordering::reverse)
            }
        }
    )*};
}

impl_tolerance!(f32, f64);
