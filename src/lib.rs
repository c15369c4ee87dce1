//! # tryad
//!
//! A tri-state wrapper that carries a value as `Some`, `None` or `Fail`
//! through chains of transformations, transparently switching from
//! synchronous to asynchronous evaluation when a step produces a deferred
//! value.
//!
//! ## Overview
//!
//! - **Wrapper**: [`Tryad`], with `map`, `flat_map`, `filter`, `attempt`
//!   and `or_else` transformations and `kind`/`or_some`/`some`/`unwrap`
//!   observations
//! - **Absence policies**: [`Nil`](value::Nil) (only nil values are `None`)
//!   and [`Falsy`](value::Falsy) (`false`, `0`, `NaN` and empty text too)
//! - **Deferred values**: [`Deferred`] and the [`Defer`] extension trait for
//!   turning futures into chain steps
//! - **Factories**: [`tryad`], [`of`], [`attempt`], [`deferred`],
//!   [`deferred_of`], [`none`] and the `is_*_like` classifiers
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Value)]` for user types (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`Kind`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tryad::prelude::*;
//!
//! let greeting = tryad("hello")
//!     .map(|text| text.to_uppercase())
//!     .filter(|text| text.starts_with('H'));
//! assert_eq!(greeting.some().now(), Some(Ok("HELLO".to_string())));
//!
//! let pending = tryad(1)
//!     .map(|value| async move { value + 1 }.defer())
//!     .map(|value| value * 10);
//! assert!(pending.is_deferred());
//! assert_eq!(futures::executor::block_on(pending.some().get()), Ok(20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

extern crate self as tryad;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use tryad::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{BoxError, InvalidStateError};
    pub use crate::factory::{
        attempt, deferred, deferred_of, is_fail_like, is_none_like, is_some_like, none, of, tryad,
    };
    pub use crate::value::{Absence, Collection, Falsy, Includes, Nil, Value};
    pub use crate::wrapper::{
        Defer, Deferred, Eventual, IntoStep, IntoTryad, Kind, Outcome, Step, Tryad,
    };

    #[cfg(feature = "derive")]
    pub use tryad_derive::Value;
}

pub mod support;
pub mod value;
pub mod wrapper;

mod error;
mod factory;

pub use error::{BoxError, InvalidStateError};
pub use factory::{
    attempt, deferred, deferred_of, is_fail_like, is_none_like, is_some_like, none, of, tryad,
};
pub use value::Value;
pub use wrapper::{Defer, Deferred, Eventual, IntoStep, IntoTryad, Kind, Outcome, Step, Tryad};

#[cfg(feature = "derive")]
pub use tryad_derive::Value;
