use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected {
        status: StatusCode,
        message: String,
        details: Value,
    },
    #[error("Gateway returned a malformed body: {0}")]
    Decode(serde_json::Error),
    #[error("Failed to encode payment payload: {0}")]
    Encode(serde_json::Error),
}

impl GatewayError {
    pub(crate) fn rejected(status: StatusCode, body: &[u8]) -> GatewayError {
        let details = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);
        let message = details
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
        GatewayError::Rejected {
            status,
            message,
            details,
        }
    }

    /// Gateway body attached to the failure, if there was one.
    pub fn details(&self) -> Value {
        match self {
            GatewayError::Rejected { details, .. } => details.clone(),
            _ => Value::Null,
        }
    }
}
