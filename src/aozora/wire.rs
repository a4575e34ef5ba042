//! Wire model and translation layer for the bank API.
//!
//! Outbound shapes serialize with the service's camelCase field names;
//! inbound shapes deserialize from its PascalCase response keys. Unknown
//! response fields are ignored and missing optional fields decode to their
//! zero value. Translation is a field-by-field copy with no validation and
//! no default substitution.

use serde::{Deserialize, Serialize};

use super::model::{
    GetRequestResultResponse, GetTransferStatusResponse, Transfer, TransferErrorInfo,
    TransferQueryResult, TransferRequestRequest, TransferRequestResponse, TransferStatusFilter,
};

/// Status-filter element as it appears on the wire.
#[derive(Debug, Serialize)]
pub(crate) struct TransferStatusFilterParam {
    #[serde(rename = "requestTransferStatus")]
    transfer_status: u8,
}

/// Renders the status-filter list as its wire encoding: a JSON array of
/// single-field objects, e.g. `[{"requestTransferStatus":2}]`. An empty
/// list renders `[]`, distinct from an absent filter.
pub(crate) fn encode_status_filters(filters: &[TransferStatusFilter]) -> String {
    let params: Vec<TransferStatusFilterParam> = filters
        .iter()
        .map(|filter| TransferStatusFilterParam { transfer_status: filter.transfer_status.code() })
        .collect();
    serde_json::to_string(&params).expect("status filter list serializes infallibly")
}

/// Transfer application request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransferRequestParam {
    account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    remitter_name: Option<String>,
    transfer_designated_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    transfer_date_holiday_code: Option<u8>,
    total_count: u32,
    total_amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    apply_comment: Option<String>,
    transfers: Vec<TransferParam>,
}

/// One transfer line item on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransferParam {
    item_id: String,
    transfer_amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    edi_info: Option<String>,
    beneficiary_bank_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    beneficiary_bank_name: Option<String>,
    beneficiary_branch_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    beneficiary_branch_name: Option<String>,
    account_type_code: u8,
    account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    beneficiary_name: Option<String>,
}

impl TransferRequestRequest {
    /// Translates this request to its wire body.
    ///
    /// The access token and idempotency key are excluded; they travel as
    /// headers.
    pub(crate) fn to_param(&self) -> TransferRequestParam {
        TransferRequestParam {
            account_id: self.account_id.clone(),
            remitter_name: self.remitter_name.clone(),
            transfer_designated_date: self.transfer_designated_date.clone(),
            transfer_date_holiday_code: self.transfer_date_holiday_code.map(|code| code.code()),
            total_count: self.total_count,
            total_amount: self.total_amount,
            apply_comment: self.apply_comment.clone(),
            transfers: self.transfers.iter().map(Transfer::to_param).collect(),
        }
    }
}

impl Transfer {
    fn to_param(&self) -> TransferParam {
        TransferParam {
            item_id: self.item_id.clone(),
            transfer_amount: self.transfer_amount,
            edi_info: self.edi_info.clone(),
            beneficiary_bank_code: self.beneficiary_bank_code.clone(),
            beneficiary_bank_name: self.beneficiary_bank_name.clone(),
            beneficiary_branch_code: self.beneficiary_branch_code.clone(),
            beneficiary_branch_name: self.beneficiary_branch_name.clone(),
            account_type_code: self.account_type_code.code(),
            account_number: self.account_number.clone(),
            beneficiary_name: self.beneficiary_name.clone(),
        }
    }
}

/// Transfer status query response body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct GetTransferStatusResponseParam {
    acceptance_key_class: String,
    base_date: String,
    base_time: String,
    count: u32,
    transfer_query_results: Option<Vec<TransferQueryResultParam>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct TransferQueryResultParam {
    apply_no: String,
    transfer_status: u8,
    transfer_status_name: String,
    transfer_designated_date: String,
}

impl From<GetTransferStatusResponseParam> for GetTransferStatusResponse {
    fn from(param: GetTransferStatusResponseParam) -> Self {
        Self {
            acceptance_key_class: param.acceptance_key_class,
            base_date: param.base_date,
            base_time: param.base_time,
            count: param.count,
            transfer_query_results: param
                .transfer_query_results
                .map(|results| results.into_iter().map(TransferQueryResult::from).collect()),
        }
    }
}

impl From<TransferQueryResultParam> for TransferQueryResult {
    fn from(param: TransferQueryResultParam) -> Self {
        Self {
            apply_no: param.apply_no,
            transfer_status: param.transfer_status,
            transfer_status_name: param.transfer_status_name,
            transfer_designated_date: param.transfer_designated_date,
        }
    }
}

/// Transfer application submission response body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct TransferRequestResponseParam {
    result_code: String,
    apply_no: String,
    apply_end_datetime: String,
}

impl From<TransferRequestResponseParam> for TransferRequestResponse {
    fn from(param: TransferRequestResponseParam) -> Self {
        Self {
            result_code: param.result_code,
            apply_no: param.apply_no,
            apply_end_datetime: param.apply_end_datetime,
        }
    }
}

/// Request result query response body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct GetRequestResultResponseParam {
    result_code: String,
    apply_no: String,
    apply_datetime: String,
    transfer_error_infos: Option<Vec<TransferErrorInfoParam>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct TransferErrorInfoParam {
    error_code: String,
    error_message: String,
}

impl From<GetRequestResultResponseParam> for GetRequestResultResponse {
    fn from(param: GetRequestResultResponseParam) -> Self {
        Self {
            result_code: param.result_code,
            apply_no: param.apply_no,
            apply_datetime: param.apply_datetime,
            transfer_error_infos: param
                .transfer_error_infos
                .map(|infos| infos.into_iter().map(TransferErrorInfo::from).collect()),
        }
    }
}

impl From<TransferErrorInfoParam> for TransferErrorInfo {
    fn from(param: TransferErrorInfoParam) -> Self {
        Self { error_code: param.error_code, error_message: param.error_message }
    }
}
