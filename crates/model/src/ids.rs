use std::fmt::Display;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::PaymentError;

const TRANSACTION_PREFIX: &str = "T";
const USER_PREFIX: &str = "MUID";
const MAX_TRANSACTION_ID_LEN: usize = 38;
const MAX_USER_ID_LEN: usize = 36;

fn is_valid_id(id: &str, max_len: usize) -> bool {
    !id.is_empty()
        && id.len() <= max_len
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Merchant transaction id shared by the pay call and the later status check.
///
/// Restricted to `[A-Za-z0-9_-]`, so it is safe to put into a URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionId(String);

impl TransactionId {
    pub fn generate() -> TransactionId {
        TransactionId(format!(
            "{}{}",
            TRANSACTION_PREFIX,
            Utc::now().timestamp_millis()
        ))
    }

    pub fn parse(id: &str) -> Result<TransactionId, PaymentError> {
        if !is_valid_id(id, MAX_TRANSACTION_ID_LEN) {
            return Err(PaymentError::InvalidTransactionId(id.to_owned()));
        }
        Ok(TransactionId(id.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TransactionId {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TransactionId::parse(&value)
    }
}

impl From<TransactionId> for String {
    fn from(id: TransactionId) -> Self {
        id.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MerchantUserId(String);

impl MerchantUserId {
    pub fn generate() -> MerchantUserId {
        MerchantUserId(format!("{}{}", USER_PREFIX, Utc::now().timestamp_millis()))
    }

    pub fn parse(id: &str) -> Result<MerchantUserId, PaymentError> {
        if !is_valid_id(id, MAX_USER_ID_LEN) {
            return Err(PaymentError::InvalidUserId(id.to_owned()));
        }
        Ok(MerchantUserId(id.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MerchantUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
