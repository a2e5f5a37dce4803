//! Cooperative cancellation of in-flight requests.
//!
//! A request pipeline holds a [`CancellationToken`] and checks it at every
//! suspension point: before sending, while streaming, before each retry or
//! redirect. The application holds the matching [`CancelHandle`] and may
//! trigger cancellation at any time.
//!
//! # Components
//!
//! - [`CancellationToken`]: the observing side
//!   - [`CancellationToken::throw_if_requested`]: synchronous fast-path check
//!   - [`CancellationToken::cancelled`]: future resolving with the reason
//!   - [`CancellationToken::run_until_cancelled`]: races in-flight work against cancellation
//! - [`CancelHandle`]: the triggering side, idempotent after the first call
//! - [`CancelSource`]: a token and its handle, returned by [`CancellationToken::source`]
//! - [`Cancel`]: the recorded reason, an [`std::error::Error`] recognised by [`is_cancel`]
//!
//! # Example
//!
//! ```
//! use micro_http_client::cancel::{CancellationToken, is_cancel};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = CancellationToken::source();
//! let token = source.token.clone();
//!
//! let request = tokio::spawn(async move {
//!     token.run_until_cancelled(std::future::pending::<()>()).await
//! });
//!
//! source.cancel.cancel_with_message("user navigated away");
//!
//! let error = request.await.unwrap().unwrap_err();
//! assert!(is_cancel(&error));
//! # }
//! ```

mod reason;
pub use reason::Cancel;
pub use reason::is_cancel;

mod token;
pub use token::CancelHandle;
pub use token::CancelSource;
pub use token::CancellationToken;
pub use token::Cancelled;
