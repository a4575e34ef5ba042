//! Deterministic query-string encoding for GET operations.
//!
//! Keys are emitted sorted lexicographically so the encoded string is
//! reproducible bit-for-bit. Zero/empty optional fields are omitted
//! entirely; an explicitly empty status-filter list still produces a
//! `requestTransferStatus=[]` parameter, which the service distinguishes
//! from an absent filter.

use url::form_urlencoded;

use super::{
    model::{GetRequestResultRequest, GetTransferStatusRequest},
    wire,
};

/// Renders key/value pairs into a sorted, percent-encoded query string.
pub(crate) fn encode_pairs(mut pairs: Vec<(&'static str, String)>) -> String {
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Pushes an optional string parameter, skipping unset and empty values.
fn push_opt(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            pairs.push((key, value.to_owned()));
        }
    }
}

impl GetTransferStatusRequest {
    /// Encodes this request as its query string.
    ///
    /// The access token is excluded; it travels as a header.
    pub(crate) fn query_string(&self) -> String {
        let mut pairs = vec![
            ("accountId", self.account_id.clone()),
            ("queryKeyClass", self.query_key_class.code().to_string()),
        ];
        push_opt(&mut pairs, "applyNo", self.apply_no.as_deref());
        push_opt(&mut pairs, "dateFrom", self.date_from.as_deref());
        push_opt(&mut pairs, "dateTo", self.date_to.as_deref());
        push_opt(&mut pairs, "nextItemKey", self.next_item_key.as_deref());
        if let Some(statuses) = &self.request_transfer_statuses {
            pairs.push(("requestTransferStatus", wire::encode_status_filters(statuses)));
        }
        if let Some(class) = self.request_transfer_class {
            pairs.push(("requestTransferClass", class.code().to_string()));
        }
        if let Some(term) = self.request_transfer_term {
            pairs.push(("requestTransferTerm", term.code().to_string()));
        }
        encode_pairs(pairs)
    }
}

impl GetRequestResultRequest {
    /// Encodes this request as its query string.
    pub(crate) fn query_string(&self) -> String {
        encode_pairs(vec![
            ("accountId", self.account_id.clone()),
            ("applyNo", self.apply_no.clone()),
        ])
    }
}
