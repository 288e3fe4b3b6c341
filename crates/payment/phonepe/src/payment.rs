use serde::{Deserialize, Serialize};
use serde_json::Value;

// {
//   "success": true,
//   "code": "PAYMENT_INITIATED",
//   "message": "Payment initiated",
//   "data": {
//     "merchantId": "PGTESTPAYUAT",
//     "merchantTransactionId": "T1700000000000",
//     "instrumentResponse": {
//       "type": "PAY_PAGE",
//       "redirectInfo": {
//         "url": "https://mercury-uat.phonepe.com/transact/simulator?token=...",
//         "method": "GET"
//       }
//     }
//   }
// }
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    pub data: Option<PayData>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PayData {
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub merchant_transaction_id: String,
    pub instrument_response: Option<InstrumentResponse>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentResponse {
    pub redirect_info: Option<RedirectInfo>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RedirectInfo {
    pub url: String,
}

impl PayResponse {
    pub fn from_value(value: &Value) -> Option<PayResponse> {
        PayResponse::deserialize(value).ok()
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .instrument_response
            .as_ref()?
            .redirect_info
            .as_ref()
            .map(|info| info.url.as_str())
    }
}

/// Where to send the payer once the gateway reports on a transaction.
#[derive(Debug, Clone)]
pub struct PaymentStatus {
    pub success: bool,
    pub redirect_url: String,
    pub details: Value,
}

impl PaymentStatus {
    pub fn from_details(redirect_base_url: &str, details: Value) -> PaymentStatus {
        let success = details
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let page = if success { "success" } else { "fail" };
        PaymentStatus {
            success,
            redirect_url: format!("{redirect_base_url}/{page}"),
            details,
        }
    }
}
