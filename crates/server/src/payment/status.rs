use axum::{
    extract::{rejection::QueryRejection, Query},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Extension,
};
use log::{error, info};
use model::ids::TransactionId;
use phonepe::PhonePe;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, STATUS_ERROR};

#[derive(Deserialize)]
pub struct StatusQuery {
    id: Option<String>,
}

/// Landing point of the gateway's POST redirect. The posted body is ignored,
/// the status is always fetched from the gateway.
pub(crate) async fn check(
    Extension(phonepe): Extension<PhonePe>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(StatusQuery { id }) = query?;
    let id = id.ok_or_else(|| ApiError::bad_request("Missing transaction id", Value::Null))?;
    info!("Status check request received for transaction: {}", id);
    let transaction_id = TransactionId::parse(&id)?;

    match phonepe.check_status(&transaction_id).await {
        Ok(status) => {
            info!("Status check completed for transaction: {}", transaction_id);
            Ok((StatusCode::FOUND, [(LOCATION, status.redirect_url)]))
        }
        Err(err) => {
            error!(
                "Status check failed for transaction: {}: {} ({})",
                transaction_id,
                err,
                err.details()
            );
            Err(ApiError::gateway(STATUS_ERROR, &err))
        }
    }
}
