use axum::{extract::rejection::JsonRejection, Extension, Json};
use log::{error, info};
use model::{
    amount::Amount,
    errors::PaymentError,
    ids::{MerchantUserId, TransactionId},
    phone::Phone,
    request::PaymentRequest,
};
use phonepe::PhonePe;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, GATEWAY_ERROR};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderBody {
    name: String,
    // Sending more than one of these names is a duplicate-field error (400).
    #[serde(alias = "number", alias = "phoneNumber")]
    phone: String,
    amount: Amount,
    transaction_id: Option<String>,
    #[serde(rename = "MUID", alias = "merchantUserId")]
    muid: Option<String>,
}

impl OrderBody {
    fn into_request(self) -> Result<PaymentRequest, PaymentError> {
        let transaction_id = match self.transaction_id {
            Some(id) => TransactionId::parse(&id)?,
            None => TransactionId::generate(),
        };
        let user_id = match self.muid {
            Some(id) => MerchantUserId::parse(&id)?,
            None => MerchantUserId::generate(),
        };
        PaymentRequest::with_ids(
            self.name,
            Phone::parse(&self.phone)?,
            self.amount,
            transaction_id,
            user_id,
        )
    }
}

pub(crate) async fn create(
    Extension(phonepe): Extension<PhonePe>,
    body: Result<Json<OrderBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let request = body.into_request().map_err(|err| {
        info!("Payment request rejected: {}", err);
        ApiError::from(err)
    })?;
    let transaction_id = request.transaction_id.clone();
    info!("Payment request received for transaction: {}", transaction_id);

    match phonepe.initiate_payment(&request).await {
        Ok(response) => {
            info!(
                "Payment request processed successfully for transaction: {}",
                transaction_id
            );
            Ok(Json(response))
        }
        Err(err) => {
            error!(
                "Payment request failed for transaction: {}: {} ({})",
                transaction_id,
                err,
                err.details()
            );
            Err(ApiError::gateway(GATEWAY_ERROR, &err))
        }
    }
}
