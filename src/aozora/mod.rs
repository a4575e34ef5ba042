//! Client bindings for the GMO Aozora Net Bank corporate API.
//!
//! Three operations are supported, each one HTTP round trip:
//!
//! - [`AozoraClient::get_transfer_status`]: query the status of transfer
//!   applications (GET with a deterministic query string)
//! - [`AozoraClient::transfer_request`]: submit a transfer application
//!   (POST with a JSON body and an idempotency key)
//! - [`AozoraClient::get_request_result`]: query the result of an accepted
//!   application (GET)
//!
//! Requests and responses use the public model re-exported here; the
//! wire-level JSON shapes and the translation between the two stay internal.

mod client;
mod model;
mod query;
mod wire;

pub use client::AozoraClient;
pub use model::{
    AccountTypeCode, GetRequestResultRequest, GetRequestResultResponse, GetTransferStatusRequest,
    GetTransferStatusResponse, QueryKeyClass, RequestTransferClass, RequestTransferTerm, Transfer,
    TransferDateHolidayCode, TransferErrorInfo, TransferQueryResult, TransferRequestRequest,
    TransferRequestResponse, TransferStatus, TransferStatusFilter,
};
