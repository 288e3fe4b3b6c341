use axum::{routing::post, Router};

mod checkout;
mod order;
mod status;

pub fn routes() -> Router {
    Router::new()
        .route("/payment/order", post(order::create))
        .route("/payment/checkout", post(checkout::submit))
        .route("/payment/status", post(status::check))
}
