//! Request cancellation and header normalization primitives for the micro http client
//!
//! This crate provides two independent building blocks that a request pipeline
//! is assembled from. Neither depends on the other.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use micro_http_client::cancel::CancellationToken;
//! use micro_http_client::header::{normalize_default_headers, to_header_map};
//!
//! let mut headers = HashMap::from([
//!     ("accept".to_string(), "application/json".to_string()),
//!     ("content-TYPE".to_string(), "application/json".to_string()),
//! ]);
//! normalize_default_headers(&mut headers);
//! assert!(headers.contains_key("Accept"));
//! assert!(headers.contains_key("Content-Type"));
//!
//! let header_map = to_header_map(&headers).unwrap();
//! assert_eq!(header_map.len(), 2);
//!
//! let source = CancellationToken::source();
//! source.cancel.cancel_with_message("no longer needed");
//! assert!(source.token.throw_if_requested().is_err());
//! ```
//!
//! # Architecture
//!
//! - [`cancel`]: one-shot cancellation tokens
//! - [`header`]: header name normalization
//!
//! # Cancellation
//!
//! A [`cancel::CancellationToken`] is checked by the pipeline before it starts
//! work and before each retry or redirect, using
//! [`cancel::CancellationToken::throw_if_requested`]. In-flight transport
//! operations are raced against the token with
//! [`cancel::CancellationToken::run_until_cancelled`], which drops the
//! operation as soon as cancellation is requested.
//!
//! Cancellation is a one-way transition: the first request records its
//! reason, every later request is ignored.
//!
//! # Error Handling
//!
//! - [`ClientError`]: Top-level error type
//! - [`CancelError`]: The operation was cancelled, wraps the [`cancel::Cancel`] reason
//! - [`HeaderError`]: A header could not be converted into an [`http::HeaderMap`]
//!
//! Header normalization itself never fails.

pub mod cancel;
pub mod header;

mod error;
pub use error::CancelError;
pub use error::ClientError;
pub use error::HeaderError;
