//! One-shot cancellation token shared between a request pipeline and the
//! application that may abort it.
//!
//! The token state is a single `watch` slot holding `Option<Cancel>`. The slot
//! moves from `None` to `Some(reason)` exactly once; every later request to
//! cancel is ignored, so all observers read the same reason.

use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::watch;
use tracing::{debug, trace};

use super::Cancel;
use crate::error::CancelError;

#[derive(Debug)]
struct Shared {
    reason: watch::Sender<Option<Cancel>>,
}

impl Shared {
    fn new() -> Arc<Self> {
        let (reason, _) = watch::channel(None);
        Arc::new(Self { reason })
    }

    /// Records `reason` if no reason has been recorded yet.
    ///
    /// The check and the write happen under the channel lock, so concurrent
    /// callers cannot both succeed.
    fn request(&self, reason: Cancel) -> bool {
        let requested = self.reason.send_if_modified(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = Some(reason);
            true
        });

        if requested {
            debug!(reason = ?self.reason.borrow().as_ref().and_then(Cancel::message), "cancellation requested");
        } else {
            trace!("cancellation already requested, ignore");
        }
        requested
    }

    fn reason(&self) -> Option<Cancel> {
        self.reason.borrow().clone()
    }
}

/// A token that observes whether cancellation of an operation was requested.
///
/// Cloning a token is cheap; all clones share the same state. The token itself
/// cannot trigger cancellation, that capability lives in [`CancelHandle`].
///
/// # Example
///
/// ```
/// use micro_http_client::cancel::CancellationToken;
///
/// let source = CancellationToken::source();
/// assert!(source.token.throw_if_requested().is_ok());
///
/// source.cancel.cancel_with_message("x");
///
/// let error = source.token.throw_if_requested().unwrap_err();
/// assert_eq!(error.reason().message(), Some("x"));
/// ```
///
/// The setup argument must be callable, anything else is rejected when the
/// program is compiled:
///
/// ```compile_fail
/// use micro_http_client::cancel::CancellationToken;
///
/// let token = CancellationToken::new(42);
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

/// The capability to cancel exactly one [`CancellationToken`].
#[derive(Debug, Clone)]
pub struct CancelHandle {
    shared: Arc<Shared>,
}

/// A token paired with the handle that cancels it.
#[derive(Debug)]
pub struct CancelSource {
    pub token: CancellationToken,
    pub cancel: CancelHandle,
}

impl CancellationToken {
    /// Creates a token and hands its cancel capability to `setup`.
    ///
    /// `setup` runs synchronously, exactly once, before this function returns.
    /// Prefer [`CancellationToken::source`] unless the capability has to be
    /// wired into existing code from inside the callback.
    pub fn new<F>(setup: F) -> Self
    where
        F: FnOnce(CancelHandle),
    {
        let shared = Shared::new();
        setup(CancelHandle { shared: Arc::clone(&shared) });
        Self { shared }
    }

    /// Creates a token together with a standalone handle that cancels it.
    ///
    /// This separates who may cancel (the holder of `cancel`) from who
    /// observes cancellation (the holder of `token`).
    #[must_use]
    pub fn source() -> CancelSource {
        let shared = Shared::new();
        CancelSource { token: Self { shared: Arc::clone(&shared) }, cancel: CancelHandle { shared } }
    }

    /// Returns the recorded reason, or `None` while cancellation has not been requested.
    #[must_use]
    pub fn reason(&self) -> Option<Cancel> {
        self.shared.reason()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.shared.reason.borrow().is_some()
    }

    /// Synchronous check for cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`CancelError::OperationCancelled`] carrying the recorded reason
    /// once cancellation has been requested.
    pub fn throw_if_requested(&self) -> Result<(), CancelError> {
        match self.reason() {
            Some(reason) => Err(CancelError::cancelled(reason)),
            None => Ok(()),
        }
    }

    /// Returns a future that resolves with the reason once cancellation is requested.
    ///
    /// The future never resolves if the token is never cancelled. Any number of
    /// these futures may be alive at the same time, all of them resolve.
    #[must_use]
    pub fn cancelled(&self) -> Cancelled {
        let shared = Arc::clone(&self.shared);
        let inner = async move {
            let mut receiver = shared.reason.subscribe();
            loop {
                let current = receiver.borrow_and_update().clone();
                if let Some(reason) = current {
                    return reason;
                }
                // the sender lives in `shared`, which this future keeps alive
                if receiver.changed().await.is_err() {
                    return std::future::pending().await;
                }
            }
        };
        Cancelled { inner: inner.boxed() }
    }

    /// Runs `fut` until it completes or cancellation is requested, whichever comes first.
    ///
    /// When cancellation wins, `fut` is dropped, which aborts whatever transport
    /// work it was driving. If the token is already cancelled, `fut` is never polled.
    ///
    /// # Errors
    ///
    /// Returns [`CancelError::OperationCancelled`] when cancellation is
    /// requested before `fut` completes.
    pub async fn run_until_cancelled<F>(&self, fut: F) -> Result<F::Output, CancelError>
    where
        F: Future,
    {
        self.throw_if_requested()?;

        tokio::select! {
            biased;
            reason = self.cancelled() => {
                debug!(reason = ?reason.message(), "in-flight operation aborted");
                Err(CancelError::cancelled(reason))
            }
            output = fut => Ok(output),
        }
    }
}

impl CancelHandle {
    /// Requests cancellation without a message.
    ///
    /// Returns `true` if this call recorded the reason, `false` if cancellation
    /// had already been requested.
    pub fn cancel(&self) -> bool {
        self.shared.request(Cancel::new())
    }

    /// Requests cancellation with a message.
    ///
    /// Only the first request is recorded; later messages are discarded.
    pub fn cancel_with_message<S: Into<String>>(&self, message: S) -> bool {
        self.shared.request(Cancel::with_message(message))
    }
}

/// Future returned by [`CancellationToken::cancelled`].
pub struct Cancelled {
    inner: BoxFuture<'static, Cancel>,
}

impl fmt::Debug for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cancelled").finish_non_exhaustive()
    }
}

impl Future for Cancelled {
    type Output = Cancel;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}
