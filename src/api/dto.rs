use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::AmountInput;

/// Body of `POST /accounts`.
///
/// `accountId` is kept as a raw JSON value so that a non-string id is
/// reported as an invalid id rather than as a malformed body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(rename = "accountId", default)]
    pub account_id: Option<Value>,
    #[serde(default)]
    pub balance: Option<AmountInput>,
}

impl CreateAccountRequest {
    /// The account id if it was sent as a JSON string, `""` otherwise.
    pub fn account_id_str(&self) -> &str {
        self.account_id
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Body of the deposit and withdraw endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct AmountRequest {
    #[serde(default)]
    pub amount: Option<AmountInput>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: f64,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub message: String,
    pub balance: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_keeps_non_string_ids() {
        let req: CreateAccountRequest =
            serde_json::from_str(r#"{"accountId": 1234567890, "balance": 10}"#).unwrap();
        assert_eq!(req.account_id_str(), "");
        assert_eq!(req.balance, Some(AmountInput::from(10)));

        let req: CreateAccountRequest = serde_json::from_str("{}").unwrap();
        assert!(req.account_id.is_none());
        assert!(req.balance.is_none());
    }

    #[test]
    fn test_amount_request_null_is_missing() {
        let req: AmountRequest = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert!(req.amount.is_none());
    }
}
