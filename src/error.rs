//! Error types.
//!
//! The wrapper relays caller failures verbatim and originates exactly one
//! error of its own: [`InvalidStateError`], raised when `some()` is called on
//! a wrapper that holds no value.

use thiserror::Error;

/// The default failure type captured by `attempt`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Raised by `some()` when the wrapper is not in the `Some` state.
///
/// # Examples
///
/// ```rust
/// use tryad::InvalidStateError;
///
/// assert_eq!(
///     InvalidStateError::None.to_string(),
///     "Cannot call some() on a None"
/// );
/// assert_eq!(
///     InvalidStateError::Fail.to_string(),
///     "Cannot call some() on a Fail"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidStateError {
    /// `some()` was called on a `None`.
    #[error("Cannot call some() on a None")]
    None,
    /// `some()` was called on a `Fail`.
    #[error("Cannot call some() on a Fail")]
    Fail,
}
