//! Operations that end a chain and observe its result.
//!
//! Each returns an [`Eventual`]: settled immediately for a ready wrapper,
//! backed by the chain's future for a pending one.

use super::{Eventual, Kind, Outcome, State, Tryad};
use crate::error::InvalidStateError;
use crate::support::invoke_if_callable;
use crate::value::{Absence, Collection, Includes};

impl<T, E, P> Tryad<T, E, P>
where
    T: Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    /// Settles the chain into its [`Outcome`].
    pub fn into_outcome(self) -> Eventual<Outcome<T, E>> {
        match self.state {
            State::Ready(outcome) => Eventual::ready(outcome),
            State::Pending(future) => Eventual::deferred(future),
        }
    }

    /// Settles the chain into a ready wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{Deferred, Kind, tryad};
    ///
    /// # futures::executor::block_on(async {
    /// let settled = tryad(Deferred::resolved(3)).settle().await;
    /// assert!(!settled.is_deferred());
    /// assert_eq!(settled.peek_kind(), Some(Kind::Some));
    /// # });
    /// ```
    pub fn settle(self) -> Eventual<Self> {
        self.into_outcome().map(Self::ready)
    }

    /// Classifies the chain.
    pub fn kind(self) -> Eventual<Kind> {
        self.into_outcome().map(|outcome| outcome.kind())
    }

    /// Returns `true` if the chain holds a present value.
    pub fn is_some(self) -> Eventual<bool> {
        self.into_outcome().map(|outcome| outcome.is_some())
    }

    /// Returns `true` if the chain holds no value.
    ///
    /// A ready `Fail` holds no value either, so it reports `true` here as
    /// well as from [`is_fail`](Self::is_fail). A pending chain that fails
    /// reports `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{BoxError, Deferred, tryad};
    ///
    /// let failed = tryad("x").attempt(|_| Err::<&str, BoxError>("e".into()));
    /// assert_eq!(failed.is_none().now(), Some(true));
    ///
    /// # futures::executor::block_on(async {
    /// let rejected = tryad(Deferred::<&str>::rejected("e".into()));
    /// assert!(!rejected.is_none().await);
    /// # });
    /// ```
    pub fn is_none(self) -> Eventual<bool> {
        match self.state {
            State::Ready(outcome) => {
                Eventual::ready(matches!(outcome, Outcome::None | Outcome::Fail(_)))
            }
            State::Pending(future) => Eventual::deferred(async move { future.await.is_none() }),
        }
    }

    /// Returns `true` if the chain captured a failure.
    pub fn is_fail(self) -> Eventual<bool> {
        self.into_outcome().map(|outcome| outcome.is_fail())
    }

    /// Calls `function` with the present value, if any.
    ///
    /// For element-wise iteration of a collection value see
    /// [`for_each_item`](Self::for_each_item).
    pub fn for_each<F>(self, function: F) -> Eventual<()>
    where
        F: FnOnce(T) + Send + 'static,
    {
        self.into_outcome().map(|outcome| {
            if let Outcome::Some(value) = outcome {
                function(value);
            }
        })
    }

    /// Returns `true` if the present value includes `other`.
    ///
    /// Always `false` for `None` and `Fail`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{none, tryad};
    ///
    /// assert_eq!(tryad("initial").includes("initial").now(), Some(true));
    /// assert_eq!(tryad("initial").includes("final").now(), Some(false));
    /// assert_eq!(tryad(vec![2, 4, 6]).includes(4).now(), Some(true));
    /// assert_eq!(none::<&str>().includes("initial").now(), Some(false));
    /// ```
    pub fn includes<Q>(self, other: Q) -> Eventual<bool>
    where
        T: Includes<Q>,
        Q: Send + 'static,
    {
        self.into_outcome().map(move |outcome| match outcome {
            Outcome::Some(value) => value.includes(&other),
            Outcome::None | Outcome::Fail(_) => false,
        })
    }

    /// Returns the present value, or `other` as a literal fallback.
    ///
    /// `other` is never called, even if it is a function. A ready wrapper
    /// always yields `Ok`. A pending wrapper that failed yields `Err` with
    /// the captured error instead of falling back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{none, tryad};
    ///
    /// let present = tryad("hello").or_some("other").now();
    /// assert_eq!(present.and_then(Result::ok), Some("hello"));
    ///
    /// let fallback = none().or_some("other").now();
    /// assert_eq!(fallback.and_then(Result::ok), Some("other"));
    /// ```
    pub fn or_some(self, other: T) -> Eventual<Result<T, E>> {
        match self.state {
            State::Ready(outcome) => Eventual::ready(Ok(outcome.some().unwrap_or(other))),
            State::Pending(future) => Eventual::deferred(async move {
                match future.await {
                    Outcome::Some(value) => Ok(value),
                    Outcome::None => Ok(other),
                    Outcome::Fail(error) => Err(error),
                }
            }),
        }
    }

    /// Returns the present value.
    ///
    /// # Errors
    ///
    /// Yields [`InvalidStateError::None`] on `None` and
    /// [`InvalidStateError::Fail`] on `Fail`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{none, tryad, InvalidStateError};
    ///
    /// assert_eq!(tryad("hello").some().now(), Some(Ok("hello")));
    /// assert_eq!(none::<&str>().some().now(), Some(Err(InvalidStateError::None)));
    /// ```
    pub fn some(self) -> Eventual<Result<T, InvalidStateError>> {
        self.into_outcome().map(|outcome| match outcome {
            Outcome::Some(value) => Ok(value),
            Outcome::None => Err(InvalidStateError::None),
            Outcome::Fail(_) => Err(InvalidStateError::Fail),
        })
    }

    /// Branches on the classification, calling exactly one handler.
    ///
    /// `if_some` receives the present value, `if_fail` the captured error and
    /// `if_none` nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::tryad;
    ///
    /// let letters = tryad("hello")
    ///     .map(|text| text.to_uppercase())
    ///     .unwrap(|text| text.chars().count(), || 0, |_| usize::MAX);
    /// assert_eq!(letters.now(), Some(5));
    /// ```
    pub fn unwrap<R, S, N, F>(self, if_some: S, if_none: N, if_fail: F) -> Eventual<R>
    where
        R: 'static,
        S: FnOnce(T) -> R + Send + 'static,
        N: FnOnce() -> R + Send + 'static,
        F: FnOnce(E) -> R + Send + 'static,
    {
        self.into_outcome().map(|outcome| match outcome {
            Outcome::Some(value) => if_some(value),
            Outcome::None => if_none(),
            Outcome::Fail(error) => if_fail(error),
        })
    }

    /// Like [`unwrap`](Self::unwrap), but every handler is optional.
    ///
    /// The selected handler is only called if it is present; otherwise the
    /// result is `None`. Use [`skip`](crate::support::skip) and
    /// [`skip_nullary`](crate::support::skip_nullary) for absent handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::support::{skip, skip_nullary};
    /// use tryad::tryad;
    ///
    /// let skipped = tryad("hello").unwrap_partial(skip(), Some(|| 0), skip());
    /// assert_eq!(skipped.now(), Some(None));
    ///
    /// let called = tryad("hello").unwrap_partial(Some(|text: &str| text.len()), skip_nullary(), skip());
    /// assert_eq!(called.now(), Some(Some(5)));
    /// ```
    pub fn unwrap_partial<R, S, N, F>(
        self,
        if_some: Option<S>,
        if_none: Option<N>,
        if_fail: Option<F>,
    ) -> Eventual<Option<R>>
    where
        R: 'static,
        S: FnOnce(T) -> R + Send + 'static,
        N: FnOnce() -> R + Send + 'static,
        F: FnOnce(E) -> R + Send + 'static,
    {
        self.into_outcome().map(|outcome| match outcome {
            Outcome::Some(value) => invoke_if_callable(if_some, value),
            Outcome::None => if_none.map(|handler| handler()),
            Outcome::Fail(error) => invoke_if_callable(if_fail, error),
        })
    }
}

impl<T, E, P> Tryad<T, E, P>
where
    T: Collection + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    /// Calls `function` with every element of a collection value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use tryad::tryad;
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// let done = tryad(vec![1, 2, 3]).for_each_item(move |value| sink.lock().unwrap().push(value));
    /// assert!(done.is_ready());
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn for_each_item<F>(self, function: F) -> Eventual<()>
    where
        F: FnMut(T::Item) + Send + 'static,
    {
        self.for_each(|collection| collection.into_iter().for_each(function))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Nil;
    use crate::wrapper::Deferred;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Strict<T> = Tryad<T, String, Nil>;

    #[rstest]
    fn ready_observations_settle_immediately() {
        assert!(Strict::new(1).is_some().is_ready());
        assert!(Strict::new(1).some().is_ready());
        assert!(Strict::new(1).kind().is_ready());
    }

    #[rstest]
    fn classification_of_ready_states() {
        assert_eq!(Strict::new(1).kind().now(), Some(Kind::Some));
        assert_eq!(Strict::<i32>::NONE.kind().now(), Some(Kind::None));
        assert_eq!(Strict::<i32>::fail("e".into()).kind().now(), Some(Kind::Fail));
        assert_eq!(Strict::<i32>::fail("e".into()).is_some().now(), Some(false));
        assert_eq!(Strict::<i32>::fail("e".into()).is_fail().now(), Some(true));
    }

    #[rstest]
    fn ready_fail_reports_none() {
        assert_eq!(Strict::<i32>::fail("e".into()).is_none().now(), Some(true));
        assert_eq!(Strict::new(1).is_none().now(), Some(false));
        assert_eq!(Strict::<i32>::NONE.is_none().now(), Some(true));
    }

    #[rstest]
    #[tokio::test]
    async fn pending_fail_does_not_report_none() {
        let wrapped: Strict<i32> = Tryad::new(Deferred::rejected("e".to_string()));
        let observed = wrapped.is_none();
        assert!(!observed.is_ready());
        assert!(!observed.await);
    }

    #[rstest]
    #[case(Strict::<i32>::NONE, InvalidStateError::None)]
    #[case(Strict::<i32>::fail("e".into()), InvalidStateError::Fail)]
    fn some_raises_on_absent_states(#[case] wrapped: Strict<i32>, #[case] expected: InvalidStateError) {
        assert_eq!(wrapped.some().now(), Some(Err(expected)));
    }

    #[rstest]
    fn ready_or_some_falls_back_on_fail() {
        assert_eq!(Strict::fail("e".into()).or_some(3).now(), Some(Ok(3)));
    }

    #[rstest]
    #[tokio::test]
    async fn pending_or_some_propagates_fail() {
        let wrapped: Strict<i32> = Tryad::new(Deferred::rejected("e".to_string()));
        assert_eq!(wrapped.or_some(3).await, Err("e".to_string()));

        let wrapped: Strict<Option<i32>> = Tryad::deferred(None);
        assert_eq!(wrapped.or_some(Some(3)).await, Ok(Some(3)));
    }

    #[rstest]
    fn for_each_skips_absent_states() {
        let calls = Arc::new(AtomicUsize::new(0));
        for wrapped in [Strict::new(1), Strict::NONE, Strict::fail("e".into())] {
            let counter = Arc::clone(&calls);
            let done = wrapped.for_each(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(done.now(), Some(()));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn includes_is_false_for_absent_states() {
        assert_eq!(Strict::<i32>::NONE.includes(1).now(), Some(false));
        assert_eq!(Strict::<i32>::fail("e".into()).includes(1).now(), Some(false));
    }

    #[rstest]
    fn unwrap_selects_one_handler() {
        let fail = Strict::<&str>::fail("boom".into()).unwrap(
            |_| "some".to_string(),
            || "none".to_string(),
            |error| error,
        );
        assert_eq!(fail.now(), Some("boom".to_string()));

        let none = Strict::<&str>::NONE.unwrap(|_| 1, || 2, |_| 3);
        assert_eq!(none.now(), Some(2));
    }

    #[rstest]
    fn unwrap_partial_skips_missing_handler() {
        let result = Strict::<i32>::fail("e".into()).unwrap_partial(
            Some(|value: i32| value),
            Some(|| 0),
            None::<fn(String) -> i32>,
        );
        assert_eq!(result.now(), Some(None));
    }

    #[rstest]
    #[tokio::test]
    async fn pending_unwrap_selects_fail_handler() {
        let wrapped: Strict<i32> = Tryad::new(Deferred::rejected("late".to_string()));
        let observed = wrapped.unwrap(|_| String::new(), String::new, |error| error);
        assert!(!observed.is_ready());
        assert_eq!(observed.await, "late");
    }

    #[rstest]
    #[tokio::test]
    async fn settle_makes_pending_ready() {
        let settled = Strict::<i32>::deferred(4).settle().await;
        assert_eq!(settled.peek_kind(), Some(Kind::Some));
        assert_eq!(settled.some().now(), Some(Ok(4)));
    }
}
