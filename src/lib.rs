//! Typed async clients for two GMO financial service APIs.
//!
//! This crate provides request/response bindings plus a thin HTTP transport
//! layer for:
//!
//! - [`aozora`]: the GMO Aozora Net Bank corporate API (transfer status
//!   queries, transfer request submission, request result queries)
//! - [`deferred`]: the GMO deferred-payment gateway (installment billing
//!   order registration)
//!
//! Each binding follows the same shape: a caller-facing **public model**, an
//! internal **wire model** matching the service's exact JSON field names, a
//! pure translation layer between the two, and a client that issues exactly
//! one HTTP request per operation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gmo_clients::{
//!     aozora::{AozoraClient, GetTransferStatusRequest, QueryKeyClass},
//!     config::ApiHostType,
//! };
//!
//! # async fn example() -> gmo_clients::error::Result<()> {
//! let client = AozoraClient::new(ApiHostType::Test);
//!
//! let request = GetTransferStatusRequest {
//!     access_token: "access_token".to_owned(),
//!     account_id: "111111111111".to_owned(),
//!     query_key_class: QueryKeyClass::TransferApplies,
//!     ..Default::default()
//! };
//!
//! let response = client.get_transfer_status(&request).await?;
//! println!("base date: {}", response.base_date);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`Result<T, ClientError>`](error::Result).
//! Transport failures (connection refused, timeout) and protocol failures
//! (non-2xx status, undecodable body) are distinct variants so callers can
//! tell "never reached the server" apart from "server replied unexpectedly".
//!
//! The services also report business errors *in-band*: an error code/message
//! list inside an otherwise well-formed 2xx response. Those decode into the
//! response value and are never raised as a local error; callers must
//! inspect the response's error fields themselves.
//!
//! # Concurrency
//!
//! Clients hold only an immutable base URL and a pooled HTTP handle; they are
//! safe for concurrent use. Each call is an independent future: dropping it
//! cancels the underlying request, and the configured timeout bounds the
//! round trip. No retries are performed at this layer.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aozora;
pub mod config;
pub mod deferred;
pub mod error;
mod transport;

pub use config::{ApiHostType, HttpConfig};
pub use error::{ClientError, Result};
