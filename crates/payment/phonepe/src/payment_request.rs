use base64::{engine::general_purpose::STANDARD, Engine as _};
use model::request::PaymentRequest;
use serde::{Deserialize, Serialize};

use crate::constants::{PAY_PAGE, REDIRECT_MODE_POST};

#[derive(Serialize, Deserialize, Debug)]
pub struct PaymentInstrument {
    #[serde(rename = "type")]
    pub instrument_type: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PayPayload {
    pub merchant_id: String,
    pub merchant_transaction_id: String,
    pub merchant_user_id: String,
    pub name: String,
    pub amount: i64,
    pub redirect_url: String,
    pub redirect_mode: String,
    pub mobile_number: String,
    pub payment_instrument: PaymentInstrument,
}

impl PayPayload {
    pub fn new(merchant_id: &str, redirect_base_url: &str, request: &PaymentRequest) -> Self {
        PayPayload {
            merchant_id: merchant_id.to_owned(),
            merchant_transaction_id: request.transaction_id.to_string(),
            merchant_user_id: request.user_id.to_string(),
            name: request.name.clone(),
            amount: request.amount.minor(),
            redirect_url: format!(
                "{}/payment/status?id={}",
                redirect_base_url, request.transaction_id
            ),
            redirect_mode: REDIRECT_MODE_POST.to_owned(),
            mobile_number: request.phone.to_string(),
            payment_instrument: PaymentInstrument {
                instrument_type: PAY_PAGE.to_owned(),
            },
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }
}

/// Body of the pay call: the base64 payload under `request`.
#[derive(Serialize, Deserialize, Debug)]
pub struct PayRequestBody {
    pub request: String,
}
