//! Capabilities of the values a [`Tryad`](crate::wrapper::Tryad) can hold.
//!
//! A wrapper never inspects its payload directly. Instead it asks the
//! payload, through the traits in this module, whether it should be treated
//! as absent, whether it behaves like a collection, and whether it contains
//! some other value:
//!
//! - [`Value`]: nil-ness and falsiness of a value
//! - [`Absence`]: the absence predicate of a chain ([`Nil`] or [`Falsy`])
//! - [`Collection`]: element-wise `map`/`filter`/`flat_map`/`for_each`
//! - [`Includes`]: membership or equality tests
//!
//! # Examples
//!
//! ```rust
//! use tryad::value::{Absence, Falsy, Nil, Value};
//!
//! assert!(Nil::is_absent(&None::<i32>));
//! assert!(!Nil::is_absent(&0));
//! assert!(Falsy::is_absent(&0));
//! assert!(Falsy::is_absent(&f64::NAN));
//! assert!(!"hello".is_falsy());
//! ```

mod absence;
mod collection;

pub use absence::{Absence, Falsy, Nil};
pub use collection::{Collection, Includes};

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be held by a wrapper.
///
/// Both methods have defaults, so most types implement `Value` with an empty
/// impl block (or `#[derive(Value)]` when the `derive` feature is enabled).
///
/// # Laws
///
/// - `value.is_nil()` implies `value.is_falsy()`
///
/// # Examples
///
/// ```rust
/// use tryad::value::Value;
///
/// struct Temperature(f64);
///
/// impl Value for Temperature {
///     fn is_falsy(&self) -> bool {
///         self.0 == 0.0
///     }
/// }
///
/// assert!(!Temperature(0.0).is_nil());
/// assert!(Temperature(0.0).is_falsy());
/// ```
pub trait Value {
    /// Returns `true` if this value is the "nothing" sentinel of its type.
    #[inline]
    fn is_nil(&self) -> bool {
        false
    }

    /// Returns `true` if this value is nil, zero, `false`, `NaN` or empty text.
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_nil()
    }
}

impl Value for () {
    #[inline]
    fn is_nil(&self) -> bool {
        true
    }
}

impl Value for bool {
    #[inline]
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl Value for char {}

macro_rules! impl_value_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Value for $integer {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_value_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_value_for_floats {
    ($($float:ty),* $(,)?) => {
        $(
            impl Value for $float {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0.0 || self.is_nan()
                }
            }
        )*
    };
}

impl_value_for_floats!(f32, f64);

impl Value for str {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Value for String {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Value for Cow<'_, str> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Value for Option<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: Value + ?Sized> Value for &T {
    #[inline]
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    #[inline]
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

macro_rules! impl_value_for_pointers {
    ($($pointer:ident),* $(,)?) => {
        $(
            impl<T: Value + ?Sized> Value for $pointer<T> {
                #[inline]
                fn is_nil(&self) -> bool {
                    (**self).is_nil()
                }

                #[inline]
                fn is_falsy(&self) -> bool {
                    (**self).is_falsy()
                }
            }
        )*
    };
}

impl_value_for_pointers!(Box, Rc, Arc);

// Collections are never nil or falsy, even when empty.
impl<T> Value for [T] {}
impl<T, const N: usize> Value for [T; N] {}
impl<T> Value for Vec<T> {}
impl<T> Value for VecDeque<T> {}
impl<T> Value for LinkedList<T> {}
impl<T> Value for BTreeSet<T> {}
impl<T, S> Value for HashSet<T, S> {}
impl<K, V> Value for BTreeMap<K, V> {}
impl<K, V, S> Value for HashMap<K, V, S> {}

macro_rules! impl_value_for_tuples {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name),+> Value for ($($name,)+) {}
        )*
    };
}

impl_value_for_tuples!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, F), (A, B, C, D, F, G));
