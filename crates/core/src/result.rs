//! The `Outcome` type: a success value or a failure value, fixed at construction.
//!
//! Extraction never panics. Calling `unwrap` or `unwrap_error` on the wrong
//! variant returns an [`InvalidUnwrap`] instead, and `throw_error` hands the
//! caller's own error back so it can be propagated with `?`.

use std::fmt::Display;

use crate::error::{InvalidUnwrap, report_misuse};

/// Return type of the extraction operations.
///
/// The error side is always a misuse fault, never the caller's domain error.
pub type UnwrapResult<T> = std::result::Result<T, InvalidUnwrap>;

/// Outcome of an operation that either succeeded with a `T` or failed with an `E`.
///
/// The variant and payload never change after construction. Branch with
/// `match`, or check [`is_ok`](Self::is_ok) / [`is_error`](Self::is_error)
/// before extracting.
///
/// # Examples
///
/// ```
/// use outcome_core::Outcome;
///
/// let doubled = Outcome::<i32, std::io::Error>::ok(2).map(|x| x * 5);
///
/// match doubled {
///     Outcome::Success(value) => assert_eq!(value, 10),
///     Outcome::Failure(e) => eprintln!("failed: {e}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub enum Outcome<T, E> {
    /// Completed with a value.
    Success(T),
    /// Failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap `value` as a success.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap `error` as a failure.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Failure(error)
    }

    /// `true` iff this is a success.
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` iff this is a failure. Always `!self.is_ok()`.
    #[inline]
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow the success value, if any.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure payload, if any.
    #[inline]
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Take the held error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUnwrap::UnwrapErrorOnSuccess`] if this is a success.
    #[inline]
    pub fn unwrap_error(self) -> UnwrapResult<E> {
        match self {
            Self::Success(_) => {
                report_misuse("unwrap_error");
                Err(InvalidUnwrap::unwrap_error_on_success())
            }
            Self::Failure(error) => Ok(error),
        }
    }

    /// Propagate the held error to the caller.
    ///
    /// On a success this does nothing. On a failure the original `E` is
    /// returned untouched, so `outcome.throw_error()?` exits the calling
    /// function at that point with exactly that error.
    ///
    /// # Errors
    ///
    /// Returns the held error if this is a failure.
    #[inline]
    pub fn throw_error(self) -> std::result::Result<(), E> {
        match self {
            Self::Success(_) => Ok(()),
            Self::Failure(error) => Err(error),
        }
    }

    /// Transform the success value with `f`.
    ///
    /// `f` runs exactly once on a success and never on a failure. A failure
    /// carries its error forward unchanged; only the value type changes.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert into the standard library `Result`.
    ///
    /// # Errors
    ///
    /// A failure becomes `Err` holding the same error.
    #[inline]
    pub fn into_result(self) -> std::result::Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E: Display> Outcome<T, E> {
    /// Take the held value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUnwrap::UnwrapOnFailure`] if this is a failure; its
    /// message embeds the failure payload's `Display` text.
    #[inline]
    pub fn unwrap(self) -> UnwrapResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => {
                report_misuse("unwrap");
                Err(InvalidUnwrap::unwrap_on_failure(error.to_string()))
            }
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
