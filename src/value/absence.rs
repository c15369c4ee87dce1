//! Absence policies.
//!
//! The absence predicate of a chain is a type parameter rather than a stored
//! closure, so it survives every type-changing step (`map`, `flat_map`, ...)
//! and cannot be altered once the chain exists.

use super::Value;

/// Decides whether a value counts as absent.
///
/// Implement this for a zero-sized marker type to give a chain custom
/// absence semantics.
///
/// # Examples
///
/// ```rust
/// use tryad::value::{Absence, Value};
/// use tryad::Tryad;
///
/// enum Never {}
///
/// impl Absence for Never {
///     fn is_absent<V: Value + ?Sized>(_value: &V) -> bool {
///         false
///     }
/// }
///
/// let wrapped = Tryad::<Option<i32>, tryad::BoxError, Never>::new(None);
/// assert_eq!(wrapped.is_some().now(), Some(true));
/// ```
pub trait Absence: 'static {
    /// Returns `true` if `value` is absent under this policy.
    fn is_absent<V: Value + ?Sized>(value: &V) -> bool;
}

/// Nil semantics: only [`Value::is_nil`] values are absent.
///
/// This is the default policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nil;

impl Absence for Nil {
    #[inline]
    fn is_absent<V: Value + ?Sized>(value: &V) -> bool {
        value.is_nil()
    }
}

/// Truthy/falsy semantics: every [`Value::is_falsy`] value is absent.
///
/// Under this policy `false`, `0`, `NaN` and empty text are absent in
/// addition to nil values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Falsy;

impl Absence for Falsy {
    #[inline]
    fn is_absent<V: Value + ?Sized>(value: &V) -> bool {
        value.is_falsy()
    }
}
