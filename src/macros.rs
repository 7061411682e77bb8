//! Check macros.
//!
//! Every macro captures `file!()`/`line!()`, the source text of its operands
//! and their values, evaluating each operand exactly once. A trailing format
//! string with arguments is printed under the operand values.
//!
//! | Fatal                | Non-fatal            | Compares                         |
//! |----------------------|----------------------|----------------------------------|
//! | `assert_cmp!(a, op, b)` | `expect_cmp!(a, op, b)` | `a op b`, op in `== != < > <= >=` |
//! | `assert_bool!(a, b)` | `expect_bool!(a, b)` | two `bool`s                      |
//! | `assert_strcmp!(a, op, b)` | `expect_strcmp!(a, op, b)` | byte-wise string order    |
//! | `assert_floatcmp!(a, op, b, eps)` | `expect_floatcmp!(a, op, b, eps)` | `a ± eps` against `b` |
//! | `assertion_fault!()` | `expectation_fault!()` | always fails                   |
//!
//! Shorthands: `expect_eq!`, `expect_ne!` (equality only, `PartialEq` is
//! enough), `expect_lt!`, `expect_le!`, `expect_gt!`, `expect_ge!`,
//! `expect_true!`, `expect_false!`, `expect_streq!`, `expect_strne!`,
//! `expect_near!`, `add_failure!`, and fatal counterparts `assert_lt!`,
//! `assert_le!`, `assert_gt!`, `assert_ge!`, `assert_true!`, `assert_false!`,
//! `assert_streq!`, `assert_strne!`, `assert_near!`, `fail!`. There is no
//! fatal `assert_eq!`/`assert_ne!` shorthand; use `assert_cmp!`.

// ------------------------------------------------------------------------------------------------
// Plumbing
// ------------------------------------------------------------------------------------------------

#[doc(hidden)]
#[macro_export]
macro_rules! __relop {
    (==) => {
        $crate::RelOp::Eq
    };
    (!=) => {
        $crate::RelOp::Ne
    };
    (<) => {
        $crate::RelOp::Lt
    };
    (>) => {
        $crate::RelOp::Gt
    };
    (<=) => {
        $crate::RelOp::Le
    };
    (>=) => {
        $crate::RelOp::Ge
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __message {
    () => {
        ::core::option::Option::None
    };
    ($($arg:tt)+) => {
        ::core::option::Option::Some(::std::format!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __here {
    () => {
        $crate::Location::new(::core::file!(), ::core::line!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check {
    ($fatal:expr, $lhs_expr:expr, $lhs:expr, $rhs_expr:expr, $rhs:expr, $operator:expr, $predicate:expr, [$($msg:tt)*]) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => $crate::evaluate(
                $crate::Check {
                    location: $crate::__here!(),
                    category: $crate::Category::from_fatal($fatal),
                    lhs_expr: $lhs_expr,
                    rhs_expr: $rhs_expr,
                    operator: $operator,
                    message: $crate::__message!($($msg)*),
                },
                lhs,
                rhs,
                $predicate,
            ),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __cmp {
    ($fatal:expr, $a:expr, $op:tt, $b:expr, [$($msg:tt)*]) => {
        $crate::__check!(
            $fatal,
            ::core::stringify!($a), $a,
            ::core::stringify!($b), $b,
            ::core::stringify!($op),
            |l, r| $crate::relate($crate::__relop!($op), l, r),
            [$($msg)*]
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __eq {
    ($fatal:expr, $a:expr, $op:tt, $b:expr, [$($msg:tt)*]) => {
        $crate::__check!(
            $fatal,
            ::core::stringify!($a), $a,
            ::core::stringify!($b), $b,
            ::core::stringify!($op),
            |l, r| $crate::equate($crate::__relop!($op), l, r),
            [$($msg)*]
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bool {
    ($fatal:expr, $a_expr:expr, $a:expr, $b_expr:expr, $b:expr, [$($msg:tt)*]) => {
        $crate::__check!(
            $fatal,
            $a_expr, $a,
            $b_expr, $b,
            "is",
            |l: &bool, r: &bool| l == r,
            [$($msg)*]
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __strcmp {
    ($fatal:expr, $a:expr, $op:tt, $b:expr, [$($msg:tt)*]) => {
        $crate::__check!(
            $fatal,
            ::core::stringify!($a), $a,
            ::core::stringify!($b), $b,
            ::core::concat!("[strcmp]", ::core::stringify!($op)),
            |l, r| $crate::__relop!($op).holds(::core::option::Option::Some($crate::strcmp(l, r))),
            [$($msg)*]
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __floatcmp {
    ($fatal:expr, $a:expr, $op:tt, $b:expr, $eps:expr, [$($msg:tt)*]) => {
        $crate::__check!(
            $fatal,
            ::core::stringify!($a), $crate::nearly_abs($a, $eps),
            ::core::stringify!($b), $b,
            ::core::concat!("[near]", ::core::stringify!($op)),
            |l, r| $crate::relate($crate::__relop!($op), l, r),
            [$($msg)*]
        )
    };
}

// ------------------------------------------------------------------------------------------------
// Relational checks
// ------------------------------------------------------------------------------------------------

/// Fatal `a op b` check.
#[macro_export]
macro_rules! assert_cmp {
    ($a:expr, $op:tt, $b:expr $(,)?) => {
        $crate::__cmp!(true, $a, $op, $b, [])
    };
    ($a:expr, $op:tt, $b:expr, $($msg:tt)+) => {
        $crate::__cmp!(true, $a, $op, $b, [$($msg)+])
    };
}

/// Non-fatal `a op b` check.
#[macro_export]
macro_rules! expect_cmp {
    ($a:expr, $op:tt, $b:expr $(,)?) => {
        $crate::__cmp!(false, $a, $op, $b, [])
    };
    ($a:expr, $op:tt, $b:expr, $($msg:tt)+) => {
        $crate::__cmp!(false, $a, $op, $b, [$($msg)+])
    };
}

/// Fatal boolean-equivalence check.
#[macro_export]
macro_rules! assert_bool {
    ($a:expr, $b:expr $(,)?) => {
        $crate::__bool!(true, ::core::stringify!($a), $a, ::core::stringify!($b), $b, [])
    };
    ($a:expr, $b:expr, $($msg:tt)+) => {
        $crate::__bool!(true, ::core::stringify!($a), $a, ::core::stringify!($b), $b, [$($msg)+])
    };
}

/// Non-fatal boolean-equivalence check.
#[macro_export]
macro_rules! expect_bool {
    ($a:expr, $b:expr $(,)?) => {
        $crate::__bool!(false, ::core::stringify!($a), $a, ::core::stringify!($b), $b, [])
    };
    ($a:expr, $b:expr, $($msg:tt)+) => {
        $crate::__bool!(false, ::core::stringify!($a), $a, ::core::stringify!($b), $b, [$($msg)+])
    };
}

/// Fatal byte-wise string comparison.
#[macro_export]
macro_rules! assert_strcmp {
    ($a:expr, $op:tt, $b:expr $(,)?) => {
        $crate::__strcmp!(true, $a, $op, $b, [])
    };
    ($a:expr, $op:tt, $b:expr, $($msg:tt)+) => {
        $crate::__strcmp!(true, $a, $op, $b, [$($msg)+])
    };
}

/// Non-fatal byte-wise string comparison.
#[macro_export]
macro_rules! expect_strcmp {
    ($a:expr, $op:tt, $b:expr $(,)?) => {
        $crate::__strcmp!(false, $a, $op, $b, [])
    };
    ($a:expr, $op:tt, $b:expr, $($msg:tt)+) => {
        $crate::__strcmp!(false, $a, $op, $b, [$($msg)+])
    };
}

/// Fatal comparison of `a ± eps` against `b`.
#[macro_export]
macro_rules! assert_floatcmp {
    ($a:expr, $op:tt, $b:expr, $eps:expr $(,)?) => {
        $crate::__floatcmp!(true, $a, $op, $b, $eps, [])
    };
    ($a:expr, $op:tt, $b:expr, $eps:expr, $($msg:tt)+) => {
        $crate::__floatcmp!(true, $a, $op, $b, $eps, [$($msg)+])
    };
}

/// Non-fatal comparison of `a ± eps` against `b`.
#[macro_export]
macro_rules! expect_floatcmp {
    ($a:expr, $op:tt, $b:expr, $eps:expr $(,)?) => {
        $crate::__floatcmp!(false, $a, $op, $b, $eps, [])
    };
    ($a:expr, $op:tt, $b:expr, $eps:expr, $($msg:tt)+) => {
        $crate::__floatcmp!(false, $a, $op, $b, $eps, [$($msg)+])
    };
}

// ------------------------------------------------------------------------------------------------
// Explicit failures
// ------------------------------------------------------------------------------------------------

/// Fatal explicit failure with an optional format message.
#[macro_export]
macro_rules! assertion_fault {
    ($($msg:tt)*) => {
        $crate::fault($crate::__here!(), true, $crate::__message!($($msg)*))
    };
}

/// Non-fatal explicit failure with an optional format message.
#[macro_export]
macro_rules! expectation_fault {
    ($($msg:tt)*) => {
        $crate::fault($crate::__here!(), false, $crate::__message!($($msg)*))
    };
}

/// Alias of [`assertion_fault!`].
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        $crate::assertion_fault!($($msg)*)
    };
}

/// Alias of [`expectation_fault!`].
#[macro_export]
macro_rules! add_failure {
    ($($msg:tt)*) => {
        $crate::expectation_fault!($($msg)*)
    };
}

/// Arms a [`Checkpoint`](crate::Checkpoint) at the current location.
#[macro_export]
macro_rules! reachable {
    () => {
        $crate::Checkpoint::arm($crate::__here!())
    };
}

/// Fatal failure marking code that must never run.
#[macro_export]
macro_rules! unreachable_code {
    () => {
        $crate::assertion_fault!("unreachable code reached")
    };
}

// ------------------------------------------------------------------------------------------------
// Shorthands
// ------------------------------------------------------------------------------------------------

#[macro_export]
macro_rules! expect_eq {
    ($a:expr, $b:expr $(,)?) => { $crate::__eq!(false, $a, ==, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__eq!(false, $a, ==, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! expect_ne {
    ($a:expr, $b:expr $(,)?) => { $crate::__eq!(false, $a, !=, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__eq!(false, $a, !=, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! expect_lt {
    ($a:expr, $b:expr $(,)?) => { $crate::__cmp!(false, $a, <, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__cmp!(false, $a, <, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! expect_le {
    ($a:expr, $b:expr $(,)?) => { $crate::__cmp!(false, $a, <=, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__cmp!(false, $a, <=, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! expect_gt {
    ($a:expr, $b:expr $(,)?) => { $crate::__cmp!(false, $a, >, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__cmp!(false, $a, >, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! expect_ge {
    ($a:expr, $b:expr $(,)?) => { $crate::__cmp!(false, $a, >=, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__cmp!(false, $a, >=, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! assert_lt {
    ($a:expr, $b:expr $(,)?) => { $crate::__cmp!(true, $a, <, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__cmp!(true, $a, <, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! assert_le {
    ($a:expr, $b:expr $(,)?) => { $crate::__cmp!(true, $a, <=, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__cmp!(true, $a, <=, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! assert_gt {
    ($a:expr, $b:expr $(,)?) => { $crate::__cmp!(true, $a, >, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__cmp!(true, $a, >, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! assert_ge {
    ($a:expr, $b:expr $(,)?) => { $crate::__cmp!(true, $a, >=, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__cmp!(true, $a, >=, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! expect_true {
    ($cond:expr $(,)?) => {
        $crate::__bool!(false, ::core::stringify!($cond), $cond, "true", true, [])
    };
    ($cond:expr, $($msg:tt)+) => {
        $crate::__bool!(false, ::core::stringify!($cond), $cond, "true", true, [$($msg)+])
    };
}

#[macro_export]
macro_rules! expect_false {
    ($cond:expr $(,)?) => {
        $crate::__bool!(false, ::core::stringify!($cond), $cond, "false", false, [])
    };
    ($cond:expr, $($msg:tt)+) => {
        $crate::__bool!(false, ::core::stringify!($cond), $cond, "false", false, [$($msg)+])
    };
}

#[macro_export]
macro_rules! assert_true {
    ($cond:expr $(,)?) => {
        $crate::__bool!(true, ::core::stringify!($cond), $cond, "true", true, [])
    };
    ($cond:expr, $($msg:tt)+) => {
        $crate::__bool!(true, ::core::stringify!($cond), $cond, "true", true, [$($msg)+])
    };
}

#[macro_export]
macro_rules! assert_false {
    ($cond:expr $(,)?) => {
        $crate::__bool!(true, ::core::stringify!($cond), $cond, "false", false, [])
    };
    ($cond:expr, $($msg:tt)+) => {
        $crate::__bool!(true, ::core::stringify!($cond), $cond, "false", false, [$($msg)+])
    };
}

#[macro_export]
macro_rules! expect_streq {
    ($a:expr, $b:expr $(,)?) => { $crate::__strcmp!(false, $a, ==, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__strcmp!(false, $a, ==, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! expect_strne {
    ($a:expr, $b:expr $(,)?) => { $crate::__strcmp!(false, $a, !=, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__strcmp!(false, $a, !=, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! assert_streq {
    ($a:expr, $b:expr $(,)?) => { $crate::__strcmp!(true, $a, ==, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__strcmp!(true, $a, ==, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! assert_strne {
    ($a:expr, $b:expr $(,)?) => { $crate::__strcmp!(true, $a, !=, $b, []) };
    ($a:expr, $b:expr, $($msg:tt)+) => { $crate::__strcmp!(true, $a, !=, $b, [$($msg)+]) };
}

#[macro_export]
macro_rules! expect_near {
    ($a:expr, $b:expr, $eps:expr $(,)?) => { $crate::__floatcmp!(false, $a, ==, $b, $eps, []) };
    ($a:expr, $b:expr, $eps:expr, $($msg:tt)+) => {
        $crate::__floatcmp!(false, $a, ==, $b, $eps, [$($msg)+])
    };
}

#[macro_export]
macro_rules! assert_near {
    ($a:expr, $b:expr, $eps:expr $(,)?) => { $crate::__floatcmp!(true, $a, ==, $b, $eps, []) };
    ($a:expr, $b:expr, $eps:expr, $($msg:tt)+) => {
        $crate::__floatcmp!(true, $a, ==, $b, $eps, [$($msg)+])
    };
}
