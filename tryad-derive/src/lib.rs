//! Derive macro for the `tryad` [`Value`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use tryad::{of, tryad, Value};
//!
//! #[derive(Value)]
//! #[value(nil = "Reading::is_missing", falsy = "Reading::is_zero")]
//! struct Reading(Option<f64>);
//!
//! impl Reading {
//!     fn is_missing(&self) -> bool {
//!         self.0.is_none()
//!     }
//!
//!     fn is_zero(&self) -> bool {
//!         self.0 == Some(0.0)
//!     }
//! }
//!
//! assert!(tryad(Reading(None)).is_none().now().unwrap());
//! assert!(tryad(Reading(Some(0.0))).is_some().now().unwrap());
//! assert!(of(Reading(Some(0.0))).is_none().now().unwrap());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod value;

use proc_macro::TokenStream;

/// Derive macro for the `Value` trait.
///
/// Without attributes the derived impl uses the trait defaults: the value is
/// never nil and is falsy only if it is nil, so it is always `Some`.
///
/// # Attributes
///
/// - `#[value(nil = "path")]`: `path` is a `fn(&Self) -> bool` deciding
///   whether the value is nil
/// - `#[value(falsy = "path")]`: `path` is a `fn(&Self) -> bool` deciding
///   whether a non-nil value is falsy
///
/// A nil value is always falsy.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::tryad::value::Value for TypeName {
///     fn is_nil(&self) -> bool { nil_path(self) }
///     fn is_falsy(&self) -> bool {
///         <Self as ::tryad::value::Value>::is_nil(self) || falsy_path(self)
///     }
/// }
/// ```
///
/// # Generics
///
/// Generic parameters are carried over to the impl unchanged, including the
/// where clause.
#[proc_macro_derive(Value, attributes(value))]
pub fn derive_value(input: TokenStream) -> TokenStream {
    value::derive_value_impl(input)
}
