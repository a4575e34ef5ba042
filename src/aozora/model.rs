//! Public request/response model for the bank API.
//!
//! Classification codes are closed enumerations with an explicit wire integer
//! value each, so only documented codes can be encoded. Inbound status codes
//! on responses stay raw integers: the translation layer copies them through
//! untouched and leaves interpretation to the caller.

/// Query target classification for a transfer status query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryKeyClass {
    /// Query transfer applications.
    #[default]
    TransferApplies,
    /// Query transfer acceptances.
    TransferAcceptances,
}

impl QueryKeyClass {
    /// Wire integer code for this classification.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::TransferApplies => 1,
            Self::TransferAcceptances => 2,
        }
    }
}

/// Status of a transfer application.
///
/// Used in the status-filter list of a transfer status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    /// Accepted by the bank, not yet applied.
    Accepted,
    /// Application submitted, awaiting approval.
    Applying,
    /// Remanded by an approver.
    Remanded,
    /// Withdrawn by the applicant.
    Withdrawn,
    /// Approval deadline expired.
    Expired,
    /// Approved.
    Approved,
    /// Rejected by an approver.
    Rejected,
}

impl TransferStatus {
    /// Wire integer code for this status.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Accepted => 1,
            Self::Applying => 2,
            Self::Remanded => 3,
            Self::Withdrawn => 4,
            Self::Expired => 5,
            Self::Approved => 8,
            Self::Rejected => 9,
        }
    }
}

/// One element of the status-filter list in a transfer status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferStatusFilter {
    /// Status to match.
    pub transfer_status: TransferStatus,
}

/// Scope of transfer applications to include in a status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTransferClass {
    /// All applications.
    All,
    /// Exclude bulk transfer applications.
    ExcludingBulk,
}

impl RequestTransferClass {
    /// Wire integer code for this classification.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::All => 1,
            Self::ExcludingBulk => 2,
        }
    }
}

/// Which date the `date_from`/`date_to` range of a status query applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTransferTerm {
    /// Range over the application acceptance date.
    ApplyDate,
    /// Range over the transfer designated date.
    TransferDesignatedDate,
}

impl RequestTransferTerm {
    /// Wire integer code for this term classification.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::ApplyDate => 1,
            Self::TransferDesignatedDate => 2,
        }
    }
}

/// Behavior when the designated transfer date falls on a bank holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDateHolidayCode {
    /// Move the transfer to the previous business day.
    PreviousBusinessDay,
    /// Move the transfer to the next business day.
    NextBusinessDay,
    /// Reject the application.
    ReturnError,
}

impl TransferDateHolidayCode {
    /// Wire integer code for this holiday handling.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::PreviousBusinessDay => 1,
            Self::NextBusinessDay => 2,
            Self::ReturnError => 3,
        }
    }
}

/// Beneficiary account type, per the Zengin code table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccountTypeCode {
    /// Ordinary account.
    #[default]
    Ordinary,
    /// Checking account.
    Checking,
    /// Savings account.
    Savings,
}

impl AccountTypeCode {
    /// Wire integer code for this account type.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Ordinary => 1,
            Self::Checking => 2,
            Self::Savings => 4,
        }
    }
}

/// Request for a transfer status query.
///
/// Only `access_token`, `account_id` and `query_key_class` are required;
/// unset optional fields are omitted from the encoded query string entirely.
/// An explicitly empty `request_transfer_statuses` list is encoded as an
/// empty list, which the service treats differently from an absent filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTransferStatusRequest {
    /// Caller-supplied access token, sent as a request header.
    pub access_token: String,
    /// Account to query.
    pub account_id: String,
    /// Query target classification.
    pub query_key_class: QueryKeyClass,
    /// Restrict to a single application number.
    pub apply_no: Option<String>,
    /// Range start date (`YYYY-MM-DD`).
    pub date_from: Option<String>,
    /// Range end date (`YYYY-MM-DD`).
    pub date_to: Option<String>,
    /// Continuation key from a previous response.
    pub next_item_key: Option<String>,
    /// Status filter list; `None` means no filter, `Some(vec![])` an
    /// explicit empty filter.
    pub request_transfer_statuses: Option<Vec<TransferStatusFilter>>,
    /// Application scope.
    pub request_transfer_class: Option<RequestTransferClass>,
    /// Which date the range applies to.
    pub request_transfer_term: Option<RequestTransferTerm>,
}

/// Response to a transfer status query.
///
/// Missing optional fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTransferStatusResponse {
    /// Acceptance key classification echoed by the service.
    pub acceptance_key_class: String,
    /// Base date of the queried data (`YYYY-MM-DD`).
    pub base_date: String,
    /// Base time of the queried data (`HH:MM:SS`).
    pub base_time: String,
    /// Number of matching applications.
    pub count: u32,
    /// Matching applications, if any.
    pub transfer_query_results: Option<Vec<TransferQueryResult>>,
}

/// One transfer application in a status query response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferQueryResult {
    /// Application number.
    pub apply_no: String,
    /// Raw status code as reported by the service; passed through untouched.
    pub transfer_status: u8,
    /// Human-readable status name.
    pub transfer_status_name: String,
    /// Designated transfer date (`YYYY-MM-DD`).
    pub transfer_designated_date: String,
}

/// Request to submit a transfer application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferRequestRequest {
    /// Caller-supplied access token, sent as a request header.
    pub access_token: String,
    /// Caller-supplied idempotency key, sent as a request header.
    pub idempotency_key: String,
    /// Remitter account.
    pub account_id: String,
    /// Remitter name override (half-width kana).
    pub remitter_name: Option<String>,
    /// Designated transfer date (`YYYY-MM-DD`).
    pub transfer_designated_date: String,
    /// Holiday handling for the designated date.
    pub transfer_date_holiday_code: Option<TransferDateHolidayCode>,
    /// Number of transfers in this application.
    pub total_count: u32,
    /// Total amount across all transfers, in yen.
    pub total_amount: u64,
    /// Free-text comment for the approver.
    pub apply_comment: Option<String>,
    /// Individual transfers.
    pub transfers: Vec<Transfer>,
}

/// One transfer line item in a transfer application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transfer {
    /// Caller-assigned item identifier, unique within the application.
    pub item_id: String,
    /// Amount in yen.
    pub transfer_amount: u64,
    /// EDI information passed to the beneficiary.
    pub edi_info: Option<String>,
    /// Beneficiary bank code.
    pub beneficiary_bank_code: String,
    /// Beneficiary bank name (half-width kana).
    pub beneficiary_bank_name: Option<String>,
    /// Beneficiary branch code.
    pub beneficiary_branch_code: String,
    /// Beneficiary branch name (half-width kana).
    pub beneficiary_branch_name: Option<String>,
    /// Beneficiary account type.
    pub account_type_code: AccountTypeCode,
    /// Beneficiary account number.
    pub account_number: String,
    /// Beneficiary name (half-width kana).
    pub beneficiary_name: Option<String>,
}

/// Response to a transfer application submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferRequestResponse {
    /// Result code reported by the service.
    pub result_code: String,
    /// Assigned application number.
    pub apply_no: String,
    /// Deadline for approval (`YYYY-MM-DDTHH:MM:SS`).
    pub apply_end_datetime: String,
}

/// Request for a transfer request result query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRequestResultRequest {
    /// Caller-supplied access token, sent as a request header.
    pub access_token: String,
    /// Account the application was submitted from.
    pub account_id: String,
    /// Application number to query.
    pub apply_no: String,
}

/// Response to a transfer request result query.
///
/// `transfer_error_infos` carries the service's own in-band errors; the call
/// itself succeeds and the caller inspects the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRequestResultResponse {
    /// Result code reported by the service.
    pub result_code: String,
    /// Application number queried.
    pub apply_no: String,
    /// Timestamp the result was fixed (`YYYY-MM-DDTHH:MM:SS`).
    pub apply_datetime: String,
    /// In-band error details, if the application failed.
    pub transfer_error_infos: Option<Vec<TransferErrorInfo>>,
}

/// One in-band error entry in a request result response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferErrorInfo {
    /// Service error code.
    pub error_code: String,
    /// Service error message.
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_key_class_codes() {
        assert_eq!(QueryKeyClass::TransferApplies.code(), 1);
        assert_eq!(QueryKeyClass::TransferAcceptances.code(), 2);
    }

    #[test]
    fn test_transfer_status_codes() {
        assert_eq!(TransferStatus::Accepted.code(), 1);
        assert_eq!(TransferStatus::Applying.code(), 2);
        assert_eq!(TransferStatus::Remanded.code(), 3);
        assert_eq!(TransferStatus::Withdrawn.code(), 4);
        assert_eq!(TransferStatus::Expired.code(), 5);
        assert_eq!(TransferStatus::Approved.code(), 8);
        assert_eq!(TransferStatus::Rejected.code(), 9);
    }

    #[test]
    fn test_request_transfer_codes() {
        assert_eq!(RequestTransferClass::All.code(), 1);
        assert_eq!(RequestTransferClass::ExcludingBulk.code(), 2);
        assert_eq!(RequestTransferTerm::ApplyDate.code(), 1);
        assert_eq!(RequestTransferTerm::TransferDesignatedDate.code(), 2);
    }

    #[test]
    fn test_holiday_and_account_type_codes() {
        assert_eq!(TransferDateHolidayCode::PreviousBusinessDay.code(), 1);
        assert_eq!(TransferDateHolidayCode::NextBusinessDay.code(), 2);
        assert_eq!(TransferDateHolidayCode::ReturnError.code(), 3);
        assert_eq!(AccountTypeCode::Ordinary.code(), 1);
        assert_eq!(AccountTypeCode::Checking.code(), 2);
        assert_eq!(AccountTypeCode::Savings.code(), 4);
    }

    #[test]
    fn test_request_defaults_leave_optionals_unset() {
        let request = GetTransferStatusRequest::default();
        assert!(request.apply_no.is_none());
        assert!(request.request_transfer_statuses.is_none());
        assert_eq!(request.query_key_class, QueryKeyClass::TransferApplies);
    }

    #[test]
    fn test_response_default_is_zero_valued() {
        let response = GetTransferStatusResponse::default();
        assert!(response.acceptance_key_class.is_empty());
        assert_eq!(response.count, 0);
        assert!(response.transfer_query_results.is_none());
    }
}
