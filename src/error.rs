//! Error types for the GMO API clients.
//!
//! # Error Categories
//!
//! - **Transport errors** ([`ClientError::Transport`]): the request may never
//!   have reached the server
//! - **Protocol errors** ([`ClientError::UnexpectedStatus`],
//!   [`ClientError::Decode`]): the server replied, but not with the expected
//!   shape
//! - **Configuration errors** ([`ClientError::Config`]): client construction
//!   rejected its inputs
//!
//! Business errors that the services embed inside a well-formed 2xx payload
//! (error code/message lists) are not represented here; they decode into the
//! response value and must be inspected by the caller.

use thiserror::Error;

/// Result type alias for client operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while issuing an API call.
///
/// No retry is performed at this layer; every error is surfaced to the
/// immediate caller after a single attempt.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received.
    ///
    /// Wraps [`reqwest::Error`]: connection refused, DNS failure, TLS error,
    /// or the configured timeout elapsing. When this is returned the call
    /// produces no response value, partial or otherwise.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server replied with a non-2xx HTTP status.
    ///
    /// Distinct from [`Transport`](Self::Transport) so callers can tell
    /// "never reached the server" apart from "server rejected the request".
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code of the reply.
        status: u16,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// A 2xx response body failed to decode as the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Client construction rejected a base URL or transport setting.
    #[error("invalid client configuration: {0}")]
    Config(String),
}
