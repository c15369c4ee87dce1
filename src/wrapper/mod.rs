//! The `Tryad` wrapper.
//!
//! A [`Tryad<T, E, P>`](Tryad) is a present value, an absent value or a
//! captured failure. It starts out ready (every operation is evaluated
//! immediately) and switches to pending evaluation the first time a step
//! produces a [`Deferred`] value. After that switch the remaining steps run
//! one after another as the deferred value settles; a pending wrapper never
//! becomes ready again on its own.
//!
//! - `T`: the wrapped value
//! - `E`: the captured failure, [`BoxError`] by default
//! - `P`: the [`Absence`] policy, [`Nil`] by default
//!
//! Transformations (`map`, `flat_map`, `filter`, `attempt`, `or_else`, ...)
//! return a new `Tryad`. Observations (`some`, `or_some`, `unwrap`,
//! `includes`, `is_some`, ...) return an [`Eventual`], which is available
//! immediately for a ready wrapper and must be awaited for a pending one.
//!
//! # Examples
//!
//! ```rust
//! use tryad::{tryad, Deferred};
//!
//! # futures::executor::block_on(async {
//! // Ready all the way through.
//! let ready = tryad("initial").map(|text| text.len()).filter(|length| *length > 3);
//! assert_eq!(ready.some().now(), Some(Ok(7)));
//!
//! // The first deferred step upgrades the rest of the chain.
//! let pending = tryad("initial")
//!     .map(|text| Deferred::new(async move { text.len() }))
//!     .filter(|length| *length > 3);
//! assert!(pending.is_deferred());
//! assert_eq!(pending.some().await, Ok(7));
//! # });
//! ```

mod deferred;
mod eventual;
mod observe;
mod outcome;
mod transform;

pub use deferred::{Defer, Deferred, IntoStep, Step};
pub use eventual::Eventual;
pub use outcome::{Kind, Outcome};

use std::fmt;
use std::future::{Future, IntoFuture};
use std::marker::PhantomData;

use futures::future::BoxFuture;
use tracing::trace;

use crate::error::BoxError;
use crate::value::{Absence, Nil, Value};

pub(crate) enum State<T, E> {
    Ready(Outcome<T, E>),
    Pending(BoxFuture<'static, Outcome<T, E>>),
}

/// A present value, an absent value, or a captured failure, evaluated now
/// or later.
///
/// # Examples
///
/// ```rust
/// use tryad::Tryad;
///
/// let some: Tryad<i32> = Tryad::new(5);
/// assert_eq!(some.some().now(), Some(Ok(5)));
///
/// let none: Tryad<i32> = Tryad::none();
/// assert_eq!(none.or_some(0).now().and_then(Result::ok), Some(0));
/// ```
#[must_use = "a Tryad does nothing unless transformed or observed"]
pub struct Tryad<T, E = BoxError, P = Nil> {
    pub(crate) state: State<T, E>,
    policy: PhantomData<fn() -> P>,
}

impl<T, E, P> Tryad<T, E, P> {
    /// The canonical `None`.
    ///
    /// Every ready `None` is this value: it carries no payload, so no two of
    /// them can be told apart.
    pub const NONE: Self = Self::ready(Outcome::None);

    /// Returns the canonical `None`.
    #[inline]
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Creates a `Fail` holding `error` exactly as given.
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self::ready(Outcome::Fail(error))
    }

    #[inline]
    pub(crate) const fn ready(outcome: Outcome<T, E>) -> Self {
        Self {
            state: State::Ready(outcome),
            policy: PhantomData,
        }
    }

    pub(crate) fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            state: State::Pending(Box::pin(future)),
            policy: PhantomData,
        }
    }

    /// Returns `true` if this wrapper is waiting on a deferred value.
    #[inline]
    pub const fn is_deferred(&self) -> bool {
        matches!(self.state, State::Pending(_))
    }

    /// Returns the classification without consuming the wrapper.
    ///
    /// Returns `None` while the wrapper is pending.
    #[inline]
    pub const fn peek_kind(&self) -> Option<Kind> {
        match &self.state {
            State::Ready(outcome) => Some(outcome.kind()),
            State::Pending(_) => None,
        }
    }

    pub(crate) async fn resolve(self) -> Outcome<T, E> {
        match self.state {
            State::Ready(outcome) => outcome,
            State::Pending(future) => future.await,
        }
    }
}

impl<T, E, P> Tryad<T, E, P>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    /// Wraps a plain or deferred value.
    ///
    /// A plain value is classified immediately: `None` if it is absent under
    /// `P`, `Some` otherwise. A [`Deferred`] value produces a pending wrapper
    /// with the same absence policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::{Deferred, Kind, Tryad};
    ///
    /// let ready: Tryad<i32> = Tryad::new(0);
    /// assert_eq!(ready.peek_kind(), Some(Kind::Some));
    ///
    /// let pending: Tryad<i32> = Tryad::new(Deferred::resolved(0));
    /// assert!(pending.is_deferred());
    /// ```
    pub fn new<V>(value: V) -> Self
    where
        V: IntoStep<E, Output = T>,
    {
        Self::from_step(value.into_step())
    }

    /// Wraps a plain or deferred value, always producing a pending wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryad::Tryad;
    ///
    /// # futures::executor::block_on(async {
    /// let pending: Tryad<&str> = Tryad::deferred("value");
    /// assert!(pending.is_deferred());
    /// assert!(pending.is_some().await);
    /// # });
    /// ```
    pub fn deferred<V>(value: V) -> Self
    where
        V: IntoStep<E, Output = T>,
    {
        match value.into_step() {
            Step::Now(value) => {
                let outcome = Self::classify(value);
                Self::pending(async move { outcome })
            }
            Step::Later(future) => Self::pending(Self::settle_later(future)),
        }
    }

    /// Wraps a settled outcome, re-classifying a `Some` payload under `P`.
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Some(value) => Self::present(value),
            absent => Self::ready(absent),
        }
    }

    #[inline]
    pub(crate) fn present(value: T) -> Self {
        Self::ready(Self::classify(value))
    }

    #[inline]
    pub(crate) fn classify(value: T) -> Outcome<T, E> {
        if P::is_absent(&value) {
            Outcome::None
        } else {
            Outcome::Some(value)
        }
    }

    pub(crate) fn from_step(step: Step<T, E>) -> Self {
        match step {
            Step::Now(value) => Self::present(value),
            Step::Later(future) => {
                trace!("deferred value produced; continuing the chain asynchronously");
                Self::pending(Self::settle_later(future))
            }
        }
    }

    async fn settle_later(future: BoxFuture<'static, Result<T, E>>) -> Outcome<T, E> {
        match future.await {
            Ok(value) => Self::classify(value),
            Err(error) => Outcome::Fail(error),
        }
    }
}

/// A callback result that already behaves like a wrapper.
///
/// `flat_map`, `attempt` and `or_else` accept any of these and flatten them
/// into the chain:
///
/// - [`Tryad`]: taken as is
/// - [`Option`]: `Some` is classified under the chain's policy, `None` is `None`
/// - [`Result`]: `Ok` is classified, `Err` becomes `Fail`
/// - [`Outcome`]: `Some` is re-classified, the rest taken as is
/// - [`Deferred`]: a pending wrapper; a rejection becomes `Fail`
pub trait IntoTryad<E, P: Absence> {
    /// The wrapped value type.
    type Output;

    /// Converts into a wrapper.
    fn into_tryad(self) -> Tryad<Self::Output, E, P>;
}

impl<T, E, P: Absence> IntoTryad<E, P> for Tryad<T, E, P> {
    type Output = T;

    #[inline]
    fn into_tryad(self) -> Self {
        self
    }
}

impl<T, E, P> IntoTryad<E, P> for Option<T>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    type Output = T;

    fn into_tryad(self) -> Tryad<T, E, P> {
        self.map_or(Tryad::NONE, Tryad::present)
    }
}

impl<T, E, P> IntoTryad<E, P> for Result<T, E>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    type Output = T;

    fn into_tryad(self) -> Tryad<T, E, P> {
        match self {
            Ok(value) => Tryad::present(value),
            Err(error) => Tryad::fail(error),
        }
    }
}

impl<T, E, P> IntoTryad<E, P> for Outcome<T, E>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    type Output = T;

    fn into_tryad(self) -> Tryad<T, E, P> {
        Tryad::from_outcome(self)
    }
}

impl<T, E, P> IntoTryad<E, P> for Deferred<T, E>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    type Output = T;

    fn into_tryad(self) -> Tryad<T, E, P> {
        Tryad::new(self)
    }
}

impl<T, E, P> From<Option<T>> for Tryad<T, E, P>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    fn from(option: Option<T>) -> Self {
        option.into_tryad()
    }
}

impl<T, E, P> From<Result<T, E>> for Tryad<T, E, P>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    fn from(result: Result<T, E>) -> Self {
        result.into_tryad()
    }
}

impl<T, E, P> From<Deferred<T, E>> for Tryad<T, E, P>
where
    T: Value + Send + 'static,
    E: Send + 'static,
    P: Absence,
{
    fn from(deferred: Deferred<T, E>) -> Self {
        Self::new(deferred)
    }
}

// Wrappers can themselves be wrapped, e.g. by `map` returning a `Tryad`.
impl<T, E, P> Value for Tryad<T, E, P> {}

impl<T: Send + 'static, E: Send + 'static, P> IntoFuture for Tryad<T, E, P> {
    type Output = Outcome<T, E>;
    type IntoFuture = BoxFuture<'static, Outcome<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        match self.state {
            State::Ready(outcome) => Box::pin(futures::future::ready(outcome)),
            State::Pending(future) => future,
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug, P> fmt::Debug for Tryad<T, E, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ready(Outcome::Some(value)) => {
                formatter.debug_tuple("Tryad::Some").field(value).finish()
            }
            State::Ready(Outcome::None) => formatter.write_str("Tryad::None"),
            State::Ready(Outcome::Fail(error)) => {
                formatter.debug_tuple("Tryad::Fail").field(error).finish()
            }
            State::Pending(_) => formatter.write_str("Tryad::Pending(<future>)"),
        }
    }
}

// Chains cross await points on multi-threaded executors.
static_assertions::assert_impl_all!(Tryad<i32>: Send);
static_assertions::assert_impl_all!(Tryad<String, String>: Send);
static_assertions::assert_impl_all!(Eventual<Outcome<i32, BoxError>>: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Falsy;
    use rstest::rstest;

    type Strict<T> = Tryad<T, String, Nil>;
    type Loose<T> = Tryad<T, String, Falsy>;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(-1)]
    fn nil_policy_wraps_numbers_as_some(#[case] value: i32) {
        assert_eq!(Strict::new(value).peek_kind(), Some(Kind::Some));
    }

    #[rstest]
    fn falsy_policy_wraps_zero_as_none() {
        assert_eq!(Loose::new(0).peek_kind(), Some(Kind::None));
        assert_eq!(Loose::new(false).peek_kind(), Some(Kind::None));
        assert_eq!(Loose::new(f64::NAN).peek_kind(), Some(Kind::None));
        assert_eq!(Loose::new(3).peek_kind(), Some(Kind::Some));
    }

    #[rstest]
    fn nil_values_are_none() {
        assert_eq!(Strict::new(None::<i32>).peek_kind(), Some(Kind::None));
        assert_eq!(Strict::new(()).peek_kind(), Some(Kind::None));
    }

    #[rstest]
    fn deferred_input_produces_pending_wrapper() {
        let wrapped: Strict<i32> = Tryad::new(Deferred::resolved(1));
        assert!(wrapped.is_deferred());
        assert_eq!(wrapped.peek_kind(), None);
    }

    #[rstest]
    fn none_constant_is_ready_none() {
        let none: Strict<i32> = Tryad::NONE;
        assert!(!none.is_deferred());
        assert_eq!(none.peek_kind(), Some(Kind::None));
    }

    #[rstest]
    fn option_and_result_conversions() {
        assert_eq!(Strict::from(Some(1)).peek_kind(), Some(Kind::Some));
        assert_eq!(Strict::<i32>::from(None).peek_kind(), Some(Kind::None));
        assert_eq!(Strict::<i32>::from(Err("e".to_string())).peek_kind(), Some(Kind::Fail));
    }

    #[rstest]
    fn from_outcome_reclassifies_some() {
        let wrapped: Loose<i32> = Tryad::from_outcome(Outcome::Some(0));
        assert_eq!(wrapped.peek_kind(), Some(Kind::None));
    }

    #[rstest]
    #[tokio::test]
    async fn deferred_constructor_always_pends() {
        let wrapped: Strict<i32> = Tryad::deferred(5);
        assert!(wrapped.is_deferred());
        assert_eq!(wrapped.await, Outcome::Some(5));
    }

    #[rstest]
    #[tokio::test]
    async fn rejected_deferred_settles_to_fail() {
        let wrapped: Strict<i32> = Tryad::new(Deferred::rejected("boom".to_string()));
        assert_eq!(wrapped.await, Outcome::Fail("boom".to_string()));
    }

    #[rstest]
    fn debug_shows_state() {
        assert_eq!(format!("{:?}", Strict::new(1)), "Tryad::Some(1)");
        assert_eq!(format!("{:?}", Strict::<i32>::NONE), "Tryad::None");
        assert_eq!(format!("{:?}", Strict::<i32>::fail("e".into())), "Tryad::Fail(\"e\")");
        assert_eq!(
            format!("{:?}", Strict::<i32>::deferred(1)),
            "Tryad::Pending(<future>)"
        );
    }
}
