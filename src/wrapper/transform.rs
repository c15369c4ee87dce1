//! Chain-continuing operations.
//!
//! Every transformation is a no-op on `None` and `Fail` (apart from
//! `or_else`, which acts on them when ready). On a ready `Some` the callback runs
//! immediately; on a pending wrapper it runs once the previous step settles.

use tracing::{debug, trace};

use super::{IntoStep, IntoTryad, Outcome, State, Step, Tryad};
use crate::value::{Absence, Collection, Value};

impl<T, E, P> Tryad<T, E, P>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    /// Continues the chain with `function` when a value is present.
    fn then<U, F>(self, function: F) -> Tryad<U, E, P>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Tryad<U, E, P> + Send + 'static,
    {
        match self.state {
            State::Ready(outcome) => match outcome.into_present() {
                Ok(value) => function(value),
                Err(absent) => Tryad::ready(absent),
            },
            State::Pending(future) => Tryad::pending(async move {
                match future.await.into_present() {
                    Ok(value) => function(value).resolve().await,
                    Err(absent) => absent,
                }
            }),
        }
    }

    /// Applies `function` to the present value.
    ///
    /// The result is classified under the chain's absence policy. A
    /// [`Deferred`](super::Deferred) result upgrades the chain; its rejection
    /// becomes `Fail`. Returning a `Tryad` nests it: use
    /// [`flat_map`](Self::flat_map) to flatten. For element-wise mapping of a
    /// collection value see [`map_items`](Self::map_items).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::tryad;
    ///
    /// let upper = tryad("hello").map(|text| text.to_uppercase());
    /// assert_eq!(upper.some().now(), Some(Ok("HELLO".to_string())));
    ///
    /// let vanished = tryad("hello").map(|_| None::<i32>);
    /// assert!(vanished.is_none().now().unwrap());
    /// ```
    pub fn map<R, F>(self, function: F) -> Tryad<R::Output, E, P>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoStep<E>,
        R::Output: Value + Send + 'static,
    {
        self.then(move |value| Tryad::from_step(function(value).into_step()))
    }

    /// Applies `function` to the present value and flattens its wrapper-like
    /// result one level.
    ///
    /// A `Some` result continues the chain with its value, an absent result
    /// collapses to `None`, a failing result becomes `Fail` and a deferred
    /// result upgrades the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{none, tryad};
    ///
    /// let world = tryad("hello").flat_map(|_| tryad("world"));
    /// assert_eq!(world.some().now(), Some(Ok("world")));
    ///
    /// let gone = tryad("hello").flat_map(|_| none::<&str>());
    /// assert!(gone.is_none().now().unwrap());
    /// ```
    pub fn flat_map<R, F>(self, function: F) -> Tryad<R::Output, E, P>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoTryad<E, P>,
        R::Output: Send + 'static,
    {
        self.then(move |value| function(value).into_tryad())
    }

    /// Keeps the present value only if `predicate` holds for it.
    ///
    /// The predicate may answer with a deferred `bool`, which upgrades the
    /// chain; a rejected answer becomes `Fail`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::tryad;
    ///
    /// let kept = tryad("hello").filter(|text| text.contains('o'));
    /// assert!(kept.is_some().now().unwrap());
    ///
    /// let dropped = tryad("world").filter(|text| text.contains('h'));
    /// assert!(dropped.is_none().now().unwrap());
    /// ```
    pub fn filter<R, F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> R + Send + 'static,
        R: IntoStep<E, Output = bool>,
    {
        self.then(move |value| match predicate(&value).into_step() {
            Step::Now(keep) => Self::ready(keep_if(value, keep)),
            Step::Later(verdict) => {
                trace!("deferred filter verdict; continuing the chain asynchronously");
                Self::pending(async move {
                    match verdict.await {
                        Ok(keep) => keep_if(value, keep),
                        Err(error) => Outcome::Fail(error),
                    }
                })
            }
        })
    }

    /// Runs a fallible step, capturing its failure.
    ///
    /// `function` reports failure by returning `Err` (or a `Deferred` that
    /// rejects). The error is stored exactly as returned and only surfaces
    /// through [`or_else`](Self::or_else) and the `if_fail` handler of
    /// [`unwrap`](Self::unwrap). A `Tryad` result is flattened one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{tryad, BoxError};
    ///
    /// let parsed = tryad("42").attempt(|text| text.parse::<i32>().map_err(BoxError::from));
    /// assert_eq!(parsed.some().now(), Some(Ok(42)));
    ///
    /// let failed = tryad("forty-two").attempt(|text| text.parse::<i32>().map_err(BoxError::from));
    /// assert!(failed.is_fail().now().unwrap());
    /// ```
    pub fn attempt<R, F>(self, function: F) -> Tryad<R::Output, E, P>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoTryad<E, P>,
        R::Output: Send + 'static,
    {
        self.then(move |value| {
            let next = function(value).into_tryad();
            if matches!(next.state, State::Ready(Outcome::Fail(_))) {
                debug!("attempt captured a failure");
            }
            next
        })
    }

    /// Recovers from `None` or `Fail`.
    ///
    /// `recover` receives `Err(Some(error))` on a ready `Fail` and
    /// `Err(None)` on a ready `None`. Its wrapper-like result replaces this
    /// wrapper. A ready `Some` is returned unchanged.
    ///
    /// On a pending wrapper `recover` runs with `Ok(value)` once the chain
    /// settles with a present value. Absence passes through, and rejections
    /// keep propagating to `unwrap`'s `if_fail` handler and to `some()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{tryad, BoxError, Tryad};
    ///
    /// let recovered = tryad("initial value")
    ///     .attempt(|_| Err::<&str, BoxError>("expected final value!".into()))
    ///     .or_else(|settled| {
    ///         let error = settled.err().flatten().unwrap();
    ///         assert_eq!(error.to_string(), "expected final value!");
    ///         Tryad::new("default value")
    ///     });
    /// assert_eq!(recovered.some().now(), Some(Ok("default value")));
    /// ```
    pub fn or_else<R, F>(self, recover: F) -> Self
    where
        F: FnOnce(Result<T, Option<E>>) -> R + Send + 'static,
        R: IntoTryad<E, P, Output = T>,
    {
        match self.state {
            State::Ready(Outcome::None) => recover(Err(None)).into_tryad(),
            State::Ready(Outcome::Fail(error)) => recover(Err(Some(error))).into_tryad(),
            State::Pending(future) => {
                trace!("or_else on a pending wrapper waits for the settled value");
                Self::from_state(State::Pending(future))
                    .then(move |value| recover(Ok(value)).into_tryad())
            }
            state => Self::from_state(state),
        }
    }

    const fn from_state(state: State<T, E>) -> Self {
        Self {
            state,
            policy: std::marker::PhantomData,
        }
    }
}

fn keep_if<T, E>(value: T, keep: bool) -> Outcome<T, E> {
    if keep { Outcome::Some(value) } else { Outcome::None }
}

impl<T, E, P> Tryad<T, E, P>
where
    T: Collection + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    /// Maps every element of a collection value.
    ///
    /// The rebuilt collection is classified under the chain's policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::tryad;
    ///
    /// let doubled = tryad(vec![1, 2, 3, 4, 5]).map_items(|value| value * 2);
    /// assert_eq!(doubled.some().now(), Some(Ok(vec![2, 4, 6, 8, 10])));
    /// ```
    pub fn map_items<U, F>(self, function: F) -> Tryad<T::Rebind<U>, E, P>
    where
        F: FnMut(T::Item) -> U + Send + 'static,
        T::Rebind<U>: Send + 'static,
    {
        self.then(move |collection| {
            Tryad::present(collection.into_iter().map(function).collect())
        })
    }

    /// Keeps the elements of a collection value that satisfy `predicate`.
    ///
    /// An emptied collection is still `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::tryad;
    ///
    /// let large = tryad(vec![2, 4, 6, 8, 10]).filter_items(|value| *value > 5);
    /// assert_eq!(large.some().now(), Some(Ok(vec![6, 8, 10])));
    /// ```
    pub fn filter_items<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T::Item) -> bool + Send + 'static,
    {
        self.then(move |collection| Self::present(collection.into_iter().filter(predicate).collect()))
    }

    /// Maps every element of a collection value to zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::tryad;
    ///
    /// let repeated = tryad(vec![1, 2]).flat_map_items(|value| vec![value; value]);
    /// assert_eq!(repeated.some().now(), Some(Ok(vec![1, 2, 2])));
    /// ```
    pub fn flat_map_items<I, F>(self, function: F) -> Tryad<T::Rebind<I::Item>, E, P>
    where
        F: FnMut(T::Item) -> I + Send + 'static,
        I: IntoIterator,
        T::Rebind<I::Item>: Send + 'static,
    {
        self.then(move |collection| {
            Tryad::present(collection.into_iter().flat_map(function).collect())
        })
    }
}
