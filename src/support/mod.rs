//! Classification predicates and construction helpers.
//!
//! Small free functions shared by the wrapper and the factory:
//!
//! - [`absent`]: the default absence predicate
//! - [`Classify`], [`is_kind`]: does an arbitrary object report a given kind
//! - [`invoke_if_callable`], [`skip`], [`skip_nullary`]: optional handlers

mod classify;

pub use classify::{Classify, is_kind};

use crate::value::{Absence, Nil, Value};

/// Returns `true` if `value` is absent under the default ([`Nil`]) policy.
///
/// # Examples
///
/// ```rust
/// use tryad::support::absent;
///
/// assert!(absent(&None::<i32>));
/// assert!(absent(&()));
/// assert!(!absent(&0));
/// ```
#[inline]
pub fn absent<V: Value + ?Sized>(value: &V) -> bool {
    Nil::is_absent(value)
}

/// Calls `handler` with `argument` if a handler is present.
///
/// # Examples
///
/// ```rust
/// use tryad::support::{invoke_if_callable, skip};
///
/// assert_eq!(invoke_if_callable(Some(|value: i32| value + 1), 1), Some(2));
/// assert_eq!(invoke_if_callable(skip::<i32, i32>(), 1), None);
/// ```
#[inline]
pub fn invoke_if_callable<A, R, F>(handler: Option<F>, argument: A) -> Option<R>
where
    F: FnOnce(A) -> R,
{
    handler.map(|handler| handler(argument))
}

/// An absent one-argument handler.
#[inline]
pub const fn skip<A, R>() -> Option<fn(A) -> R> {
    None
}

/// An absent handler that takes no arguments.
#[inline]
pub const fn skip_nullary<R>() -> Option<fn() -> R> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn absent_matches_nil_values_only() {
        assert!(absent(&None::<String>));
        assert!(!absent(&false));
        assert!(!absent(""));
    }

    #[rstest]
    fn missing_handler_yields_nothing() {
        assert_eq!(invoke_if_callable(skip::<&str, usize>(), "text"), None);
        assert_eq!(skip_nullary::<u8>().map(|handler| handler()), None);
    }

    #[rstest]
    fn present_handler_is_called_once() {
        let mut calls = 0;
        let result = invoke_if_callable(
            Some(|value: &str| {
                calls += 1;
                value.len()
            }),
            "text",
        );
        assert_eq!(result, Some(4));
        assert_eq!(calls, 1);
    }
}
