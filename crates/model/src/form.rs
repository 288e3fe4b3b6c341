use log::debug;
use serde::Deserialize;

use crate::{
    amount::Amount,
    errors::{Field, FormErrors, PaymentError},
    phone::{Phone, PHONE_LEN},
    request::{validate_name, PaymentRequest},
};

/// Raw values of the payment form, exactly as typed by the payer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub amount: String,
}

impl PaymentForm {
    /// Applies the form rules and builds a request with fresh ids.
    pub fn validate(&self) -> Result<PaymentRequest, PaymentError> {
        let mut errors = FormErrors::default();

        if validate_name(&self.name).is_err() {
            errors.push(Field::Name, "Name must be at least 2 characters");
        }

        let phone = if self.phone_number.chars().count() != PHONE_LEN {
            errors.push(Field::PhoneNumber, "Phone number must be 10 digits");
            None
        } else {
            match Phone::parse(&self.phone_number) {
                Ok(phone) => Some(phone),
                Err(_) => {
                    errors.push(Field::PhoneNumber, "Must be a valid phone number");
                    None
                }
            }
        };

        let amount = if self.amount.is_empty() {
            errors.push(Field::Amount, "Amount is required");
            None
        } else {
            match Amount::try_from(self.amount.as_str()) {
                Ok(amount) => Some(amount),
                Err(_) => {
                    errors.push(Field::Amount, "Amount must be greater than 0");
                    None
                }
            }
        };

        match (phone, amount) {
            (Some(phone), Some(amount)) if errors.is_empty() => {
                PaymentRequest::new(self.name.clone(), phone, amount)
            }
            _ => {
                debug!("payment form rejected: {}", errors);
                Err(PaymentError::Form(errors))
            }
        }
    }
}
