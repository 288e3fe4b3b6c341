use axum::{Extension, Router};
use env::Env;
use eyre::{Context as _, Result};
use log::info;
use phonepe::PhonePe;

pub mod error;
mod pages;
mod payment;

pub fn router(phonepe: PhonePe) -> Router {
    Router::new()
        .merge(pages::routes())
        .merge(payment::routes())
        .layer(Extension(phonepe))
}

pub async fn serve(env: Env) -> Result<()> {
    let phonepe = PhonePe::new(&env)?;
    info!("merchant: {}", phonepe.merchant_id());
    let app = router(phonepe);

    let listener = tokio::net::TcpListener::bind(env.host())
        .await
        .with_context(|| format!("Failed to bind {}", env.host()))?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{
        body::{to_bytes, Body},
        extract::Path,
        http::{header, Request, StatusCode},
        response::Response,
        routing::{get, post},
        Json,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt as _;

    use super::*;

    async fn pay(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if body["request"].as_str().is_none() {
            return (StatusCode::BAD_REQUEST, Json(json!({"message": "no request"})));
        }
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "code": "PAYMENT_INITIATED",
                "message": "Payment initiated",
                "data": {
                    "merchantId": "PGTESTPAYUAT",
                    "merchantTransactionId": "T1",
                    "instrumentResponse": {
                        "type": "PAY_PAGE",
                        "redirectInfo": { "url": "https://pay.example/checkout", "method": "GET" }
                    }
                }
            })),
        )
    }

    async fn status(Path((_merchant, tx)): Path<(String, String)>) -> (StatusCode, Json<Value>) {
        match tx.as_str() {
            "TPAID" => (StatusCode::OK, Json(json!({"success": true, "code": "PAYMENT_SUCCESS"}))),
            "TDECLINED" => (StatusCode::OK, Json(json!({"success": false, "code": "PAYMENT_ERROR"}))),
            _ => (
                StatusCode::BAD_REQUEST,
                Json(json!({"success": false, "message": "Transaction not found"})),
            ),
        }
    }

    async fn gateway(pay_ok: bool) -> SocketAddr {
        let pay_route = if pay_ok {
            post(pay)
        } else {
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"success": false, "code": "KEY_NOT_CONFIGURED", "message": "Key not found for the merchant"})),
                )
            })
        };
        let app = Router::new()
            .route("/pg/v1/pay", pay_route)
            .route("/pg/v1/status/:merchant/:tx", get(status));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn app(pay_ok: bool) -> Router {
        let api = format!("http://{}", gateway(pay_ok).await);
        let env = Env::from_lookup(|key| match key {
            "PHONEPE_SALT_KEY" => Some("salt".to_string()),
            "PHONEPE_MERCHANT_ID" => Some("PGTESTPAYUAT".to_string()),
            "REDIRECT_BASE_URL" => Some("http://localhost:3333".to_string()),
            "PHONEPE_API_BASE_URL" => Some(api.clone()),
            _ => None,
        })
        .unwrap();
        router(PhonePe::new(&env).unwrap())
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_order_returns_gateway_body() {
        let app = app(true).await;
        let response = app
            .oneshot(json_post(
                "/payment/order",
                json!({
                    "name": "John Doe",
                    "amount": 100,
                    "number": "9999999999",
                    "MUID": "MUID1700000000000",
                    "transactionId": "T1700000000000"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["data"]["instrumentResponse"]["redirectInfo"]["url"],
            json!("https://pay.example/checkout")
        );
    }

    #[tokio::test]
    async fn test_order_generates_missing_ids() {
        let app = app(true).await;
        let response = app
            .oneshot(json_post(
                "/payment/order",
                json!({"name": "John Doe", "amount": "10.5", "phone": "9999999999"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_order_validation_errors() {
        let app = app(true).await;
        for body in [
            json!({"name": "John", "amount": 0, "number": "9999999999"}),
            json!({"name": "John", "amount": 10, "number": "99999"}),
            json!({"name": "J", "amount": 10, "number": "9999999999"}),
            json!({"name": "John", "amount": 10, "number": "9999999999", "transactionId": "../x"}),
            json!({"name": "John"}),
        ] {
            let response = app
                .clone()
                .oneshot(json_post("/payment/order", body.clone()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            let json = body_json(response).await;
            assert_eq!(json["status"], json!(400));
            assert_eq!(json["error"], json!("Bad Request"));
        }
    }

    #[tokio::test]
    async fn test_order_rejects_two_phone_fields() {
        let app = app(true).await;
        let response = app
            .oneshot(json_post(
                "/payment/order",
                json!({"name": "John", "amount": 10, "phone": "9999999999", "number": "9999999999"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], json!("Bad Request"));
        assert!(body["message"].as_str().unwrap().contains("duplicate field"));
    }

    #[tokio::test]
    async fn test_order_gateway_failure() {
        let app = app(false).await;
        let response = app
            .oneshot(json_post(
                "/payment/order",
                json!({"name": "John Doe", "amount": 100, "number": "9999999999"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["status"], json!(500));
        assert_eq!(body["error"], json!("Payment Gateway Error"));
        assert_eq!(body["message"], json!("Key not found for the merchant"));
        assert_eq!(body["details"]["code"], json!("KEY_NOT_CONFIGURED"));
    }

    async fn status_location(app: Router, id: &str) -> Response {
        app.oneshot(
            Request::post(format!("/payment/status?id={id}"))
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("code=PAYMENT_SUCCESS&merchantId=PGTESTPAYUAT"))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_status_redirects() {
        let app = app(true).await;

        let response = status_location(app.clone(), "TPAID").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "http://localhost:3333/success"
        );

        let response = status_location(app, "TDECLINED").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "http://localhost:3333/fail"
        );
    }

    #[tokio::test]
    async fn test_status_failure() {
        let app = app(true).await;
        let response = status_location(app, "TMISSING").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], json!("Payment Status Check Failed"));
        assert_eq!(body["message"], json!("Transaction not found"));
    }

    #[tokio::test]
    async fn test_status_bad_query_is_json() {
        let app = app(true).await;
        let response = app
            .oneshot(
                Request::post("/payment/status?id=TA&id=TB")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], json!(400));
        assert_eq!(body["error"], json!("Bad Request"));
    }

    #[tokio::test]
    async fn test_status_requires_valid_id() {
        let app = app(true).await;
        let response = app
            .clone()
            .oneshot(Request::post("/payment/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = status_location(app, "T%2F..%2Fpay").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_checkout_redirects_to_gateway() {
        let app = app(true).await;
        let response = app
            .oneshot(
                Request::post("/payment/checkout")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=John+Doe&phoneNumber=9999999999&amount=250"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://pay.example/checkout"
        );
    }

    #[tokio::test]
    async fn test_checkout_form_errors() {
        let app = app(true).await;
        let response = app
            .oneshot(
                Request::post("/payment/checkout")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=J&phoneNumber=12ab&amount="))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["details"],
            json!([
                {"field": "name", "message": "Name must be at least 2 characters"},
                {"field": "phoneNumber", "message": "Phone number must be 10 digits"},
                {"field": "amount", "message": "Amount is required"}
            ])
        );
    }

    #[tokio::test]
    async fn test_pages() {
        let app = app(true).await;
        for (uri, needle) in [
            ("/", "Payment Details"),
            ("/success", "Payment successful"),
            ("/fail", "Payment failed"),
            ("/health", "ok"),
        ] {
            let response = app
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(String::from_utf8_lossy(&bytes).contains(needle), "{uri}");
        }
    }
}
