//! Kind reporting for wrapper-like objects.

use crate::wrapper::{Kind, Outcome, Tryad};

/// An object that can report whether it is `Some`, `None` or `Fail`.
///
/// Implemented for [`Tryad`] (which cannot report while pending),
/// [`Outcome`], [`Option`] and [`Result`].
pub trait Classify {
    /// Returns the kind of this object, or `None` if it cannot tell yet.
    fn classify(&self) -> Option<Kind>;
}

impl<T, E, P> Classify for Tryad<T, E, P> {
    #[inline]
    fn classify(&self) -> Option<Kind> {
        self.peek_kind()
    }
}

impl<T, E> Classify for Outcome<T, E> {
    #[inline]
    fn classify(&self) -> Option<Kind> {
        Some(self.kind())
    }
}

impl<T> Classify for Option<T> {
    #[inline]
    fn classify(&self) -> Option<Kind> {
        Some(if self.is_some() { Kind::Some } else { Kind::None })
    }
}

impl<T, E> Classify for Result<T, E> {
    #[inline]
    fn classify(&self) -> Option<Kind> {
        Some(if self.is_ok() { Kind::Some } else { Kind::Fail })
    }
}

impl<C: Classify + ?Sized> Classify for &C {
    #[inline]
    fn classify(&self) -> Option<Kind> {
        (**self).classify()
    }
}

/// Returns `true` if `value` reports exactly `kind`.
///
/// # Examples
///
/// ```rust
/// use tryad::support::is_kind;
/// use tryad::Kind;
///
/// assert!(is_kind(&Some(1), Kind::Some));
/// assert!(is_kind(&Err::<i32, &str>("e"), Kind::Fail));
/// assert!(!is_kind(&None::<i32>, Kind::Some));
/// ```
#[inline]
pub fn is_kind<V: Classify + ?Sized>(value: &V, kind: Kind) -> bool {
    value.classify() == Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Nil;
    use crate::wrapper::Deferred;
    use rstest::rstest;

    #[rstest]
    fn pending_wrapper_cannot_report() {
        let pending: Tryad<i32, String, Nil> = Tryad::new(Deferred::resolved(1));
        assert_eq!(pending.classify(), None);
        assert!(!is_kind(&pending, Kind::Some));
    }

    #[rstest]
    fn ready_wrapper_reports_its_kind() {
        let fail: Tryad<i32, String, Nil> = Tryad::fail("e".to_string());
        assert!(is_kind(&fail, Kind::Fail));
        assert!(!is_kind(&fail, Kind::None));
    }

    #[rstest]
    fn outcome_reports_its_kind() {
        assert!(is_kind(&Outcome::<i32, ()>::None, Kind::None));
    }
}
