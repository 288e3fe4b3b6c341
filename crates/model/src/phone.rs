use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::errors::PaymentError;

pub const PHONE_LEN: usize = 10;

/// Ten-digit mobile number as the gateway expects it in `mobileNumber`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(phone: &str) -> Result<Phone, PaymentError> {
        if phone.len() != PHONE_LEN || !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PaymentError::InvalidPhone);
        }
        Ok(Phone(phone.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
