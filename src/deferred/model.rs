//! Public request/response model for the deferred-payment gateway.
//!
//! All values here are plain data: created by the caller (requests) or the
//! client (responses), never mutated afterwards. Field contents are passed
//! through as-is; validation belongs to the gateway.

/// Shop credentials, supplied by the caller on every request.
///
/// The client neither stores nor refreshes these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopInfo {
    /// Shop identifier issued by the gateway.
    pub shop_id: String,
    /// Connection password issued by the gateway.
    pub connect_password: String,
}

/// Buyer and transaction attributes for an order registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buyer {
    /// Shop-side transaction identifier.
    pub shop_transaction_id: String,
    /// Order date on the shop side (`YYYY-MM-DD`).
    pub shop_order_date: String,
    /// Buyer full name.
    pub full_name: String,
    /// Buyer full name, kana.
    pub full_name_kana: String,
    /// Postal code.
    pub zip_code: String,
    /// Address.
    pub address: String,
    /// Company name, when the buyer is a business.
    pub company_name: String,
    /// Department name, when the buyer is a business.
    pub department_name: String,
    /// Primary telephone number.
    pub tel1: String,
    /// Secondary telephone number.
    pub tel2: String,
    /// Primary email address.
    pub email: String,
    /// Secondary email address.
    pub email2: String,
    /// Billed amount, in yen, as a decimal string.
    pub billed_amount: String,
    /// Gateway extension slot 1, passed through untouched.
    pub gmo_extend1: String,
    /// Payment type classification code.
    pub payment_type: String,
    /// Buyer sex classification code.
    pub sex: String,
    /// Birth date (`YYYYMMDD`).
    pub birth_day: String,
    /// Date the buyer registered as a member of the shop (`YYYYMMDD`).
    pub member_regist_date: String,
    /// Number of previous purchases at the shop.
    pub buy_count: String,
    /// Total amount of previous purchases, in yen.
    pub buy_amount_total: String,
    /// Shop-side member identifier.
    pub member_id: String,
}

/// A delivery within an order.
///
/// The delivery customer is optional: when the goods ship to the buyer
/// themselves, the nested record is absent and stays absent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Recipient, when different from the buyer.
    pub delivery_customer: Option<DeliveryCustomer>,
    /// Line items in this delivery. An empty list is encoded explicitly.
    pub details: Vec<Detail>,
}

/// Recipient of a delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryCustomer {
    /// Recipient full name.
    pub full_name: String,
    /// Recipient full name, kana.
    pub full_name_kana: String,
    /// Postal code.
    pub zip_code: String,
    /// Address.
    pub address: String,
    /// Company name.
    pub company_name: String,
    /// Department name.
    pub department_name: String,
    /// Telephone number.
    pub tel: String,
}

/// One line item in a delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detail {
    /// Item name.
    pub detail_name: String,
    /// Unit price, in yen, as a decimal string.
    pub detail_price: String,
    /// Quantity, as a decimal string.
    pub detail_quantity: String,
    /// Gateway extension slot 2, passed through untouched.
    pub gmo_extend2: String,
    /// Gateway extension slot 3, passed through untouched.
    pub gmo_extend3: String,
    /// Gateway extension slot 4, passed through untouched.
    pub gmo_extend4: String,
    /// Item brand.
    pub detail_brand: String,
    /// Item category.
    pub detail_category: String,
}

/// Request to register an order for deferred billing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Caller-supplied shop credentials.
    pub shop_info: ShopInfo,
    /// Buyer and transaction attributes.
    pub buyer: Buyer,
    /// Deliveries making up the order.
    pub deliveries: Vec<Delivery>,
}

/// Response to an order registration.
///
/// A non-empty [`errors`](Self::errors) list means the gateway rejected the
/// registration; the HTTP call itself still succeeds and no local error is
/// raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterResponse {
    /// Overall screening result code.
    pub result: String,
    /// Gateway-reported errors; empty on success.
    pub errors: Vec<GatewayError>,
    /// Transaction identifiers, present when the registration was accepted.
    pub transaction_result: Option<TransactionResult>,
}

/// One gateway-reported error entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayError {
    /// Gateway error code.
    pub error_code: String,
    /// Gateway error message.
    pub error_message: String,
}

/// Transaction identifiers assigned by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionResult {
    /// Shop-side transaction identifier, echoed back.
    pub shop_transaction_id: String,
    /// Gateway-assigned transaction identifier.
    pub gmo_transaction_id: String,
    /// Authorization screening result code.
    pub author_result: String,
}
