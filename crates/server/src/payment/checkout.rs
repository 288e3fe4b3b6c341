use axum::{extract::rejection::FormRejection, response::Redirect, Extension, Form};
use log::{error, info, warn};
use model::form::PaymentForm;
use phonepe::{payment::PayResponse, PhonePe};

use crate::error::{ApiError, GATEWAY_ERROR};

/// Plain form submit: validates, starts the payment and sends the browser
/// straight to the gateway page.
pub(crate) async fn submit(
    Extension(phonepe): Extension<PhonePe>,
    form: Result<Form<PaymentForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form?;
    let request = form.validate()?;
    info!(
        "Checkout received for transaction: {}",
        request.transaction_id
    );

    let body = phonepe.initiate_payment(&request).await.map_err(|err| {
        error!(
            "Checkout failed for transaction: {}: {}",
            request.transaction_id, err
        );
        ApiError::gateway(GATEWAY_ERROR, &err)
    })?;

    let response = PayResponse::from_value(&body).unwrap_or_default();
    match response.redirect_url() {
        Some(url) => Ok(Redirect::to(url)),
        None => {
            warn!(
                "Gateway returned no redirect for transaction: {} ({})",
                request.transaction_id, response.code
            );
            let message = if response.message.is_empty() {
                "Gateway returned no redirect url".to_owned()
            } else {
                response.message.clone()
            };
            Err(ApiError::internal(GATEWAY_ERROR, message, body))
        }
    }
}
