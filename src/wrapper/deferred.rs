//! Deferred values and the results that callbacks may produce.
//!
//! A callback handed to `map`, `filter` or `Tryad::new` may answer with a
//! plain [`Value`] or with a [`Deferred`]. The first deferred answer moves the
//! rest of the chain onto asynchronous evaluation.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::error::BoxError;
use crate::value::Value;

/// A value that becomes available later, or fails.
///
/// `Deferred` is the host deferred-value primitive the wrapper delegates all
/// scheduling to. It settles exactly once, to `Ok` (resolution) or `Err`
/// (rejection). It is itself a future and can be awaited directly.
///
/// # Examples
///
/// ```rust
/// use tryad::{tryad, Deferred};
///
/// # futures::executor::block_on(async {
/// let wrapped = tryad("hello").map(|text| Deferred::new(async move { text.len() }));
/// assert!(wrapped.is_deferred());
/// assert_eq!(wrapped.some().await, Ok(5));
/// # });
/// ```
#[must_use = "deferred values do nothing unless wrapped or awaited"]
pub struct Deferred<T, E = BoxError> {
    future: BoxFuture<'static, Result<T, E>>,
}

impl<T: Send + 'static, E: Send + 'static> Deferred<T, E> {
    /// Creates a deferred value that resolves with the output of `future`.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            future: future.map(Ok).boxed(),
        }
    }

    /// Creates a deferred value that resolves or rejects with the output of
    /// `future`.
    pub fn fallible<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Creates an already-resolved deferred value.
    pub fn resolved(value: T) -> Self {
        Self {
            future: futures::future::ready(Ok(value)).boxed(),
        }
    }

    /// Creates an already-rejected deferred value.
    pub fn rejected(error: E) -> Self {
        Self {
            future: futures::future::ready(Err(error)).boxed(),
        }
    }
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.as_mut().poll(context)
    }
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Deferred(<future>)")
    }
}

/// Converts any sendable future into a [`Deferred`].
///
/// # Examples
///
/// ```rust
/// use tryad::{tryad, Defer};
///
/// # futures::executor::block_on(async {
/// let doubled = tryad(21).map(|value| async move { value * 2 }.defer());
/// assert_eq!(doubled.some().await, Ok(42));
///
/// let failed = tryad(21).map(|_| async { Err::<i32, _>("offline".into()) }.try_defer());
/// assert!(failed.is_fail().await);
/// # });
/// ```
pub trait Defer: Future + Sized + Send + 'static {
    /// Wraps a future that cannot fail.
    fn defer<E>(self) -> Deferred<Self::Output, E>
    where
        Self::Output: Send + 'static,
        E: Send + 'static,
    {
        Deferred::new(self)
    }

    /// Wraps a future whose `Err` output is a rejection.
    fn try_defer<T, E>(self) -> Deferred<T, E>
    where
        Self: Future<Output = Result<T, E>>,
        T: Send + 'static,
        E: Send + 'static,
    {
        Deferred::fallible(self)
    }
}

impl<F: Future + Send + 'static> Defer for F {}

/// What a callback produced: a value now, or a future of one.
pub enum Step<T, E> {
    /// An immediately-available value.
    Now(T),
    /// A value that will resolve or reject later.
    Later(BoxFuture<'static, Result<T, E>>),
}

/// A callback result that is either a plain value or a deferred one.
///
/// Every [`Value`] converts to [`Step::Now`]; [`Deferred`] converts to
/// [`Step::Later`].
pub trait IntoStep<E>: Sized {
    /// The value produced once the step settles.
    type Output;

    /// Converts into a [`Step`].
    fn into_step(self) -> Step<Self::Output, E>;

    /// Returns `true` if converting yields [`Step::Later`].
    fn is_deferred(&self) -> bool {
        false
    }
}

impl<T: Value, E> IntoStep<E> for T {
    type Output = T;

    #[inline]
    fn into_step(self) -> Step<T, E> {
        Step::Now(self)
    }
}

impl<T, E> IntoStep<E> for Deferred<T, E> {
    type Output = T;

    #[inline]
    fn into_step(self) -> Step<T, E> {
        Step::Later(self.future)
    }

    fn is_deferred(&self) -> bool {
        true
    }
}
