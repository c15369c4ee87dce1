//! The top-level factory surface.
//!
//! These functions fix the failure type to [`BoxError`]. Use the
//! [`Tryad`] constructors directly for other failure types or policies.
//!
//! # Examples
//!
//! ```rust
//! use tryad::{is_none_like, is_some_like, none, of, tryad};
//!
//! assert!(is_some_like(&tryad(0)));
//! assert!(is_none_like(&of(0)));
//! assert!(is_none_like(&none::<i32>()));
//! ```

use crate::error::BoxError;
use crate::support::{Classify, is_kind};
use crate::value::{Falsy, Nil, Value};
use crate::wrapper::{IntoStep, IntoTryad, Kind, Tryad};

/// Wraps a value with nil semantics: only nil values are `None`.
///
/// A [`Deferred`](crate::Deferred) value produces a pending wrapper.
///
/// An `Option` is a value like any other: `Some(x)` is kept whole, so the
/// wrapper holds `Option<T>`. To lift an `Option` or `Result` into the
/// wrapper itself use [`Tryad::from`], or [`flat_map`](Tryad::flat_map)
/// inside a chain.
///
/// # Examples
///
/// ```rust
/// use tryad::{Tryad, tryad};
///
/// assert_eq!(tryad(Some(5)).some().now(), Some(Ok(Some(5))));
/// assert_eq!(Tryad::<i32>::from(Some(5)).some().now(), Some(Ok(5)));
/// ```
pub fn tryad<V>(value: V) -> Tryad<V::Output, BoxError, Nil>
where
    V: IntoStep<BoxError>,
    V::Output: Value + Send + 'static,
{
    Tryad::new(value)
}

/// Wraps a value with truthy/falsy semantics: `false`, `0`, `NaN`, empty
/// text and nil values are `None`.
pub fn of<V>(value: V) -> Tryad<V::Output, BoxError, Falsy>
where
    V: IntoStep<BoxError>,
    V::Output: Value + Send + 'static,
{
    Tryad::new(value)
}

/// Wraps `value` with truthy/falsy semantics and runs `function` as a
/// failure-capturing step.
///
/// # Examples
///
/// ```rust
/// use tryad::{attempt, BoxError};
///
/// let failed = attempt("woops", |text| Err::<&str, BoxError>(text.into()));
/// assert_eq!(failed.is_fail().now(), Some(true));
/// ```
pub fn attempt<V, R, F>(value: V, function: F) -> Tryad<R::Output, BoxError, Falsy>
where
    V: IntoStep<BoxError>,
    V::Output: Value + Send + 'static,
    F: FnOnce(V::Output) -> R + Send + 'static,
    R: IntoTryad<BoxError, Falsy>,
    R::Output: Send + 'static,
{
    of(value).attempt(function)
}

/// Wraps a value with nil semantics, always producing a pending wrapper.
pub fn deferred<V>(value: V) -> Tryad<V::Output, BoxError, Nil>
where
    V: IntoStep<BoxError>,
    V::Output: Value + Send + 'static,
{
    Tryad::deferred(value)
}

/// Wraps a value with truthy/falsy semantics, always producing a pending
/// wrapper.
pub fn deferred_of<V>(value: V) -> Tryad<V::Output, BoxError, Falsy>
where
    V: IntoStep<BoxError>,
    V::Output: Value + Send + 'static,
{
    Tryad::deferred(value)
}

/// Returns the canonical `None`.
#[inline]
pub const fn none<T>() -> Tryad<T, BoxError, Nil> {
    Tryad::NONE
}

/// Returns `true` if `value` reports `Some`.
#[inline]
pub fn is_some_like<V: Classify + ?Sized>(value: &V) -> bool {
    is_kind(value, Kind::Some)
}

/// Returns `true` if `value` reports `None`.
#[inline]
pub fn is_none_like<V: Classify + ?Sized>(value: &V) -> bool {
    is_kind(value, Kind::None)
}

/// Returns `true` if `value` reports `Fail`.
#[inline]
pub fn is_fail_like<V: Classify + ?Sized>(value: &V) -> bool {
    is_kind(value, Kind::Fail)
}
