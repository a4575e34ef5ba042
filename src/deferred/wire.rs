//! Wire model and translation layer for the deferred-payment gateway.
//!
//! Both directions are pure field-by-field copies: `to_param` translates the
//! public model to the gateway's camelCase JSON shape, and the `From`
//! conversions translate wire responses back. Absent optional nested records
//! stay absent, and an empty line-item list stays an explicit empty list;
//! the two carry different meaning to the gateway.
//!
//! Translation is total and lossless, so `from` after `to_param` is the
//! identity on every type present on both sides.

use serde::{Deserialize, Serialize};

use super::model::{
    Buyer, Delivery, DeliveryCustomer, Detail, GatewayError, RegisterRequest, RegisterResponse,
    ShopInfo, TransactionResult,
};

/// Order registration request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequestParam {
    shop_info: ShopInfoParam,
    buyer: BuyerParam,
    deliveries: Vec<DeliveryParam>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ShopInfoParam {
    shop_id: String,
    connect_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct BuyerParam {
    shop_transaction_id: String,
    shop_order_date: String,
    full_name: String,
    full_name_kana: String,
    zip_code: String,
    address: String,
    company_name: String,
    department_name: String,
    tel1: String,
    tel2: String,
    email: String,
    email2: String,
    billed_amount: String,
    gmo_extend1: String,
    payment_type: String,
    sex: String,
    birth_day: String,
    member_regist_date: String,
    buy_count: String,
    buy_amount_total: String,
    member_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DeliveryParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_customer: Option<DeliveryCustomerParam>,
    details: Vec<DetailParam>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DeliveryCustomerParam {
    full_name: String,
    full_name_kana: String,
    zip_code: String,
    address: String,
    company_name: String,
    department_name: String,
    tel: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DetailParam {
    detail_name: String,
    detail_price: String,
    detail_quantity: String,
    gmo_extend2: String,
    gmo_extend3: String,
    gmo_extend4: String,
    detail_brand: String,
    detail_category: String,
}

/// Order registration response body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RegisterResponseParam {
    result: String,
    errors: Vec<GatewayErrorParam>,
    transaction_result: Option<TransactionResultParam>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct GatewayErrorParam {
    error_code: String,
    error_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TransactionResultParam {
    shop_transaction_id: String,
    gmo_transaction_id: String,
    author_result: String,
}

impl RegisterRequest {
    /// Translates this request to its wire body.
    pub(crate) fn to_param(&self) -> RegisterRequestParam {
        RegisterRequestParam {
            shop_info: self.shop_info.to_param(),
            buyer: self.buyer.to_param(),
            deliveries: self.deliveries.iter().map(Delivery::to_param).collect(),
        }
    }
}

impl ShopInfo {
    pub(crate) fn to_param(&self) -> ShopInfoParam {
        ShopInfoParam {
            shop_id: self.shop_id.clone(),
            connect_password: self.connect_password.clone(),
        }
    }
}

impl Buyer {
    pub(crate) fn to_param(&self) -> BuyerParam {
        BuyerParam {
            shop_transaction_id: self.shop_transaction_id.clone(),
            shop_order_date: self.shop_order_date.clone(),
            full_name: self.full_name.clone(),
            full_name_kana: self.full_name_kana.clone(),
            zip_code: self.zip_code.clone(),
            address: self.address.clone(),
            company_name: self.company_name.clone(),
            department_name: self.department_name.clone(),
            tel1: self.tel1.clone(),
            tel2: self.tel2.clone(),
            email: self.email.clone(),
            email2: self.email2.clone(),
            billed_amount: self.billed_amount.clone(),
            gmo_extend1: self.gmo_extend1.clone(),
            payment_type: self.payment_type.clone(),
            sex: self.sex.clone(),
            birth_day: self.birth_day.clone(),
            member_regist_date: self.member_regist_date.clone(),
            buy_count: self.buy_count.clone(),
            buy_amount_total: self.buy_amount_total.clone(),
            member_id: self.member_id.clone(),
        }
    }
}

impl Delivery {
    pub(crate) fn to_param(&self) -> DeliveryParam {
        DeliveryParam {
            delivery_customer: self.delivery_customer.as_ref().map(DeliveryCustomer::to_param),
            details: self.details.iter().map(Detail::to_param).collect(),
        }
    }
}

impl DeliveryCustomer {
    pub(crate) fn to_param(&self) -> DeliveryCustomerParam {
        DeliveryCustomerParam {
            full_name: self.full_name.clone(),
            full_name_kana: self.full_name_kana.clone(),
            zip_code: self.zip_code.clone(),
            address: self.address.clone(),
            company_name: self.company_name.clone(),
            department_name: self.department_name.clone(),
            tel: self.tel.clone(),
        }
    }
}

impl Detail {
    pub(crate) fn to_param(&self) -> DetailParam {
        DetailParam {
            detail_name: self.detail_name.clone(),
            detail_price: self.detail_price.clone(),
            detail_quantity: self.detail_quantity.clone(),
            gmo_extend2: self.gmo_extend2.clone(),
            gmo_extend3: self.gmo_extend3.clone(),
            gmo_extend4: self.gmo_extend4.clone(),
            detail_brand: self.detail_brand.clone(),
            detail_category: self.detail_category.clone(),
        }
    }
}

impl From<BuyerParam> for Buyer {
    fn from(param: BuyerParam) -> Self {
        Self {
            shop_transaction_id: param.shop_transaction_id,
            shop_order_date: param.shop_order_date,
            full_name: param.full_name,
            full_name_kana: param.full_name_kana,
            zip_code: param.zip_code,
            address: param.address,
            company_name: param.company_name,
            department_name: param.department_name,
            tel1: param.tel1,
            tel2: param.tel2,
            email: param.email,
            email2: param.email2,
            billed_amount: param.billed_amount,
            gmo_extend1: param.gmo_extend1,
            payment_type: param.payment_type,
            sex: param.sex,
            birth_day: param.birth_day,
            member_regist_date: param.member_regist_date,
            buy_count: param.buy_count,
            buy_amount_total: param.buy_amount_total,
            member_id: param.member_id,
        }
    }
}

impl From<DeliveryParam> for Delivery {
    fn from(param: DeliveryParam) -> Self {
        Self {
            delivery_customer: param.delivery_customer.map(DeliveryCustomer::from),
            details: param.details.into_iter().map(Detail::from).collect(),
        }
    }
}

impl From<DeliveryCustomerParam> for DeliveryCustomer {
    fn from(param: DeliveryCustomerParam) -> Self {
        Self {
            full_name: param.full_name,
            full_name_kana: param.full_name_kana,
            zip_code: param.zip_code,
            address: param.address,
            company_name: param.company_name,
            department_name: param.department_name,
            tel: param.tel,
        }
    }
}

impl From<DetailParam> for Detail {
    fn from(param: DetailParam) -> Self {
        Self {
            detail_name: param.detail_name,
            detail_price: param.detail_price,
            detail_quantity: param.detail_quantity,
            gmo_extend2: param.gmo_extend2,
            gmo_extend3: param.gmo_extend3,
            gmo_extend4: param.gmo_extend4,
            detail_brand: param.detail_brand,
            detail_category: param.detail_category,
        }
    }
}

impl From<RegisterResponseParam> for RegisterResponse {
    fn from(param: RegisterResponseParam) -> Self {
        Self {
            result: param.result,
            errors: param.errors.into_iter().map(GatewayError::from).collect(),
            transaction_result: param.transaction_result.map(TransactionResult::from),
        }
    }
}

impl From<GatewayErrorParam> for GatewayError {
    fn from(param: GatewayErrorParam) -> Self {
        Self { error_code: param.error_code, error_message: param.error_message }
    }
}

impl From<TransactionResultParam> for TransactionResult {
    fn from(param: TransactionResultParam) -> Self {
        Self {
            shop_transaction_id: param.shop_transaction_id,
            gmo_transaction_id: param.gmo_transaction_id,
            author_result: param.author_result,
        }
    }
}
