//! Misuse faults raised by the extraction operations of [`Outcome`].
//!
//! These are never the caller's domain error. Seeing an [`InvalidUnwrap`]
//! means the caller extracted from the wrong variant without checking first.
//!
//! [`Outcome`]: crate::Outcome

use thiserror::Error;

/// Extraction called on the wrong variant of an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUnwrap {
    /// `unwrap` on a failure. `message` is the failure payload's `Display` text.
    #[error("Called unwrap on an Err value: {message}")]
    UnwrapOnFailure {
        /// Rendered failure payload.
        message: String,
    },

    /// `unwrap_error` on a success.
    #[error("Called unwrapError on an Ok value")]
    UnwrapErrorOnSuccess,
}

impl InvalidUnwrap {
    /// Create the fault for `unwrap` on a failure holding `message`.
    #[inline]
    #[must_use]
    pub fn unwrap_on_failure(message: impl Into<String>) -> Self {
        Self::UnwrapOnFailure {
            message: message.into(),
        }
    }

    /// Create the fault for `unwrap_error` on a success.
    #[inline]
    #[must_use]
    pub const fn unwrap_error_on_success() -> Self {
        Self::UnwrapErrorOnSuccess
    }
}

/// Record that `operation` was called on the wrong variant.
///
/// The event names the operation only; the failure payload is never logged.
#[cfg(feature = "tracing")]
pub(crate) fn report_misuse(operation: &'static str) {
    tracing::debug!(target: "outcome_core", operation, "extraction called on the wrong variant");
}

#[cfg(not(feature = "tracing"))]
pub(crate) const fn report_misuse(_operation: &'static str) {}
