//! Results that are either available now or must be awaited.

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::FutureExt;
use futures::future::{BoxFuture, Either, Ready};

enum Inner<R> {
    Ready(R),
    Deferred(BoxFuture<'static, R>),
}

/// The result of observing a wrapper.
///
/// Observing a ready wrapper yields an `Eventual` that already holds its
/// value; observing a pending wrapper yields one backed by a future. Either
/// way the result can be `.await`ed, so callers need not know which kind of
/// wrapper they hold. Callers that do know can use [`Eventual::now`].
///
/// # Examples
///
/// ```rust
/// use tryad::tryad;
///
/// let length = tryad("hello").map(str::len).some();
/// assert!(length.is_ready());
/// assert_eq!(length.now(), Some(Ok(5)));
/// ```
#[must_use = "an Eventual does nothing unless inspected or awaited"]
pub struct Eventual<R> {
    inner: Inner<R>,
}

impl<R> Eventual<R> {
    /// Creates an `Eventual` that is already settled.
    #[inline]
    pub const fn ready(value: R) -> Self {
        Self {
            inner: Inner::Ready(value),
        }
    }

    /// Creates an `Eventual` that settles when `future` completes.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = R> + Send + 'static,
    {
        Self {
            inner: Inner::Deferred(Box::pin(future)),
        }
    }

    /// Returns `true` if the value is available without awaiting.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self.inner, Inner::Ready(_))
    }

    /// Returns the value if it is available without awaiting.
    ///
    /// A deferred `Eventual` is dropped and `None` is returned.
    #[inline]
    pub fn now(self) -> Option<R> {
        self.into_ready().ok()
    }

    /// Returns the value if it is available, or gives the `Eventual` back.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the value is still deferred.
    #[inline]
    pub fn into_ready(self) -> Result<R, Self> {
        match self.inner {
            Inner::Ready(value) => Ok(value),
            inner @ Inner::Deferred(_) => Err(Self { inner }),
        }
    }

    /// Transforms the value once it is available.
    ///
    /// A ready `Eventual` applies `function` immediately.
    pub fn map<U, F>(self, function: F) -> Eventual<U>
    where
        R: 'static,
        U: 'static,
        F: FnOnce(R) -> U + Send + 'static,
    {
        match self.inner {
            Inner::Ready(value) => Eventual::ready(function(value)),
            Inner::Deferred(future) => Eventual {
                inner: Inner::Deferred(future.map(function).boxed()),
            },
        }
    }

    /// Waits for the value.
    pub async fn get(self) -> R
    where
        R: 'static,
    {
        self.await
    }
}

impl<R: 'static> IntoFuture for Eventual<R> {
    type Output = R;
    type IntoFuture = Either<Ready<R>, BoxFuture<'static, R>>;

    fn into_future(self) -> Self::IntoFuture {
        match self.inner {
            Inner::Ready(value) => Either::Left(futures::future::ready(value)),
            Inner::Deferred(future) => Either::Right(future),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Eventual<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Ready(value) => formatter.debug_tuple("Eventual::Ready").field(value).finish(),
            Inner::Deferred(_) => formatter.write_str("Eventual::Deferred(<future>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ready_is_available_now() {
        let eventual = Eventual::ready(42);
        assert!(eventual.is_ready());
        assert_eq!(eventual.now(), Some(42));
    }

    #[rstest]
    fn deferred_is_not_available_now() {
        let eventual = Eventual::deferred(async { 42 });
        assert!(!eventual.is_ready());
        assert!(eventual.into_ready().is_err());
    }

    #[rstest]
    fn map_on_ready_applies_immediately() {
        assert_eq!(Eventual::ready(20).map(|value| value + 1).now(), Some(21));
    }

    #[rstest]
    #[tokio::test]
    async fn map_on_deferred_applies_after_settling() {
        let eventual = Eventual::deferred(async { 20 }).map(|value| value * 2);
        assert!(!eventual.is_ready());
        assert_eq!(eventual.await, 40);
    }

    #[rstest]
    #[tokio::test]
    async fn ready_can_be_awaited() {
        assert_eq!(Eventual::ready("done").get().await, "done");
    }

    #[rstest]
    fn debug_hides_future() {
        let eventual = Eventual::deferred(async { 1 });
        assert_eq!(format!("{eventual:?}"), "Eventual::Deferred(<future>)");
        assert_eq!(format!("{:?}", Eventual::ready(1)), "Eventual::Ready(1)");
    }
}
