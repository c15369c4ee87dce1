//! Nested-container capabilities.
//!
//! A wrapped value that is itself a container can take over element-wise
//! operations. [`Collection`] is checked at compile time: the element-wise
//! wrapper methods (`map_items`, `filter_items`, ...) only exist when the
//! payload implements it.

use std::collections::{LinkedList, VecDeque};

use super::Value;

/// A value that behaves like a sequence of elements.
///
/// # Examples
///
/// ```rust
/// use tryad::value::Collection;
///
/// fn double<C: Collection<Item = i32>>(collection: C) -> C::Rebind<i32> {
///     collection.into_iter().map(|element| element * 2).collect()
/// }
///
/// assert_eq!(double(vec![1, 2, 3]), vec![2, 4, 6]);
/// ```
pub trait Collection: Value + IntoIterator + FromIterator<<Self as IntoIterator>::Item> {
    /// The same kind of collection holding elements of type `U`.
    type Rebind<U>: Value + FromIterator<U> + IntoIterator<Item = U>;
}

impl<T> Collection for Vec<T> {
    type Rebind<U> = Vec<U>;
}

impl<T> Collection for VecDeque<T> {
    type Rebind<U> = VecDeque<U>;
}

impl<T> Collection for LinkedList<T> {
    type Rebind<U> = LinkedList<U>;
}

/// Membership test used by `includes`.
///
/// Every `PartialEq` type includes the values it is equal to. Sequences
/// additionally include each of their elements.
///
/// # Examples
///
/// ```rust
/// use tryad::value::Includes;
///
/// assert!("initial".includes(&"initial"));
/// assert!(!"initial".includes(&"final"));
/// assert!(vec![2, 4, 6].includes(&4));
/// ```
pub trait Includes<Q> {
    /// Returns `true` if `other` is equal to, or an element of, `self`.
    fn includes(&self, other: &Q) -> bool;
}

impl<T: PartialEq> Includes<T> for T {
    #[inline]
    fn includes(&self, other: &T) -> bool {
        self == other
    }
}

impl<T: PartialEq> Includes<T> for Vec<T> {
    #[inline]
    fn includes(&self, other: &T) -> bool {
        self.contains(other)
    }
}

impl<T: PartialEq> Includes<T> for VecDeque<T> {
    #[inline]
    fn includes(&self, other: &T) -> bool {
        self.contains(other)
    }
}

impl<T: PartialEq> Includes<T> for LinkedList<T> {
    #[inline]
    fn includes(&self, other: &T) -> bool {
        self.contains(other)
    }
}

impl<T: PartialEq, const N: usize> Includes<T> for [T; N] {
    #[inline]
    fn includes(&self, other: &T) -> bool {
        self.contains(other)
    }
}
