//! Client bindings for the GMO deferred-payment gateway.
//!
//! A single operation is supported: [`DeferredClient::register`], which
//! registers an order for deferred (installment) billing. The gateway
//! reports screening failures *in-band*: a non-empty error list inside a
//! well-formed 2xx response. The call succeeds in that case and the caller
//! inspects [`RegisterResponse::errors`].

mod client;
mod model;
mod wire;

pub use client::DeferredClient;
pub use model::{
    Buyer, Delivery, DeliveryCustomer, Detail, GatewayError, RegisterRequest, RegisterResponse,
    ShopInfo, TransactionResult,
};
