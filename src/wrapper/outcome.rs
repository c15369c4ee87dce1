//! The three logical states of a wrapper.

use std::fmt;

/// The classification of a wrapper: present value, absent value, or failure.
///
/// # Examples
///
/// ```rust
/// use tryad::Kind;
///
/// assert_eq!(Kind::Fail.to_string(), "Fail");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// A present, usable value.
    Some,
    /// An absent value.
    None,
    /// A captured failure.
    Fail,
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Some => "Some",
            Self::None => "None",
            Self::Fail => "Fail",
        };
        formatter.write_str(name)
    }
}

/// A settled wrapper state with its payload.
///
/// `Some` always holds a value that is not absent under the absence policy
/// of the wrapper that produced it. `Fail` holds the captured error exactly
/// as it was raised.
///
/// # Examples
///
/// ```rust
/// use tryad::{Kind, Outcome};
///
/// let outcome: Outcome<i32, String> = Outcome::Fail("boom".to_string());
/// assert_eq!(outcome.kind(), Kind::Fail);
/// assert_eq!(outcome.some(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A present value.
    Some(T),
    /// No value.
    None,
    /// A captured failure.
    Fail(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns the classification of this outcome.
    #[inline]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Some(_) => Kind::Some,
            Self::None => Kind::None,
            Self::Fail(_) => Kind::Fail,
        }
    }

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Fail`.
    #[inline]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Converts into the present value, discarding `None` and `Fail`.
    #[inline]
    pub fn some(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None | Self::Fail(_) => None,
        }
    }

    /// Converts into the captured failure, if any.
    #[inline]
    pub fn fail(self) -> Option<E> {
        match self {
            Self::Fail(error) => Some(error),
            Self::Some(_) | Self::None => None,
        }
    }

    /// Returns a reference to the present value.
    #[inline]
    pub const fn some_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None | Self::Fail(_) => None,
        }
    }

    /// Returns a reference to the captured failure.
    #[inline]
    pub const fn fail_ref(&self) -> Option<&E> {
        match self {
            Self::Fail(error) => Some(error),
            Self::Some(_) | Self::None => None,
        }
    }

    /// Splits off the present value; `None` and `Fail` are re-typed and
    /// returned unchanged.
    #[inline]
    pub(crate) fn into_present<U>(self) -> Result<T, Outcome<U, E>> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Outcome::None),
            Self::Fail(error) => Err(Outcome::Fail(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Some(value),
            Err(error) => Self::Fail(error),
        }
    }
}
