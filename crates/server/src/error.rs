use axum::{
    extract::rejection::{FormRejection, JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use model::errors::PaymentError;
use phonepe::errors::GatewayError;
use serde_json::{json, Value};

pub const GATEWAY_ERROR: &str = "Payment Gateway Error";
pub const STATUS_ERROR: &str = "Payment Status Check Failed";

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    message: String,
    details: Value,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            error: "Bad Request",
            message: message.into(),
            details,
        }
    }

    pub fn internal(error: &'static str, message: impl Into<String>, details: Value) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
            message: message.into(),
            details,
        }
    }

    pub fn gateway(error: &'static str, err: &GatewayError) -> Self {
        ApiError::internal(error, err.to_string(), err.details())
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        let details = match &err {
            PaymentError::Form(errors) => serde_json::to_value(errors).unwrap_or(Value::Null),
            _ => Value::Null,
        };
        ApiError::bad_request(err.to_string(), details)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text(), Value::Null)
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::bad_request(rejection.body_text(), Value::Null)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text(), Value::Null)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "status": self.status.as_u16(),
            "error": self.error,
            "message": self.message,
            "details": self.details,
        });
        (self.status, Json(body)).into_response()
    }
}
