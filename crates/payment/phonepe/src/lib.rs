pub mod checksum;
pub mod constants;
pub mod errors;
pub mod payment;
pub mod payment_request;

use env::Env;
use eyre::{Context as _, Error};
use log::{debug, info};
use model::{ids::TransactionId, request::PaymentRequest};
use payment::PaymentStatus;
use payment_request::{PayPayload, PayRequestBody};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, Response,
};
use serde_json::Value;

use crate::{
    checksum::checksum,
    constants::{status_endpoint, APPLICATION_JSON, PAY_ENDPOINT, X_MERCHANT_ID, X_VERIFY},
    errors::GatewayError,
};

#[derive(Clone)]
pub struct PhonePe {
    client: Client,
    salt_key: String,
    key_index: String,
    merchant_id: String,
    api_base_url: String,
    redirect_base_url: String,
}

impl PhonePe {
    pub fn new(env: &Env) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(env.timeout())
            .build()
            .context("Failed to build http client")?;
        Ok(Self {
            client,
            salt_key: env.salt_key().to_owned(),
            key_index: env.key_index().to_owned(),
            merchant_id: env.merchant_id().to_owned(),
            api_base_url: env.api_base_url().to_owned(),
            redirect_base_url: env.redirect_base_url().to_owned(),
        })
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// Starts a pay-page payment and returns the gateway body as is.
    pub async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Value, GatewayError> {
        info!(
            "Initiating payment for transaction: {}",
            request.transaction_id
        );
        let payload = PayPayload::new(&self.merchant_id, &self.redirect_base_url, request);
        debug!("Payment payload: {:?}", payload);

        let encoded = payload.encode().map_err(GatewayError::Encode)?;
        let x_verify = checksum(&encoded, PAY_ENDPOINT, &self.salt_key, &self.key_index);

        let response = self
            .client
            .post(format!("{}{}", self.api_base_url, PAY_ENDPOINT))
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(X_VERIFY, x_verify)
            .json(&PayRequestBody { request: encoded })
            .send()
            .await?;
        let body = read_body(response).await?;

        info!(
            "Payment initiated successfully for transaction: {}",
            request.transaction_id
        );
        Ok(body)
    }

    pub async fn check_status(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<PaymentStatus, GatewayError> {
        info!("Checking payment status for transaction: {}", transaction_id);
        let endpoint = status_endpoint(&self.merchant_id, transaction_id.as_str());
        let x_verify = checksum("", &endpoint, &self.salt_key, &self.key_index);

        let response = self
            .client
            .get(format!("{}{}", self.api_base_url, endpoint))
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(X_VERIFY, x_verify)
            .header(X_MERCHANT_ID, &self.merchant_id)
            .send()
            .await?;
        let body = read_body(response).await?;

        let status = PaymentStatus::from_details(&self.redirect_base_url, body);
        info!(
            "Payment status checked successfully for transaction: {} (success: {})",
            transaction_id, status.success
        );
        Ok(status)
    }
}

async fn read_body(response: Response) -> Result<Value, GatewayError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(GatewayError::rejected(status, &body));
    }
    serde_json::from_slice(&body).map_err(GatewayError::Decode)
}
