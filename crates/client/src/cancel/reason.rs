//! The value a cancelled operation settles with.

use std::error::Error;
use std::fmt;

/// Reason recorded when cancellation of an operation is requested.
///
/// A `Cancel` is immutable once created. It implements [`Error`] so that a
/// pipeline can tell "this operation was cancelled" apart from transport
/// failures, see [`is_cancel`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cancel {
    message: Option<String>,
}

impl Cancel {
    /// Creates a reason without a message.
    #[must_use]
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Creates a reason carrying a human readable message.
    #[must_use]
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        Self { message: Some(message.into()) }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Cancel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "Cancel: {message}"),
            None => f.write_str("Cancel"),
        }
    }
}

impl Error for Cancel {}

/// Returns `true` if `error`, or any error in its source chain, is a [`Cancel`].
///
/// # Example
///
/// ```
/// use micro_http_client::cancel::{is_cancel, Cancel};
/// use micro_http_client::CancelError;
///
/// let error = CancelError::cancelled(Cancel::with_message("user abort"));
/// assert!(is_cancel(&error));
///
/// let io = std::io::Error::other("connection reset");
/// assert!(!is_cancel(&io));
/// ```
pub fn is_cancel(error: &(dyn Error + 'static)) -> bool {
    std::iter::successors(Some(error), |&e| e.source()).any(|e| e.is::<Cancel>())
}
