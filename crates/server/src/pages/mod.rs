use axum::{response::Html, routing::get, Router};

const INDEX: &str = include_str!("../../static/index.html");

const SUCCESS: &str = r#"<!doctype html>
<html lang="en"><head><meta charset="utf-8"><title>Payment successful</title></head>
<body><h1>Payment successful</h1><p>Thank you, your payment went through.</p><a href="/">New payment</a></body>
</html>"#;

const FAIL: &str = r#"<!doctype html>
<html lang="en"><head><meta charset="utf-8"><title>Payment failed</title></head>
<body><h1>Payment failed</h1><p>The payment did not go through. Please try again.</p><a href="/">Try again</a></body>
</html>"#;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(|| async { Html(INDEX) }))
        .route("/success", get(|| async { Html(SUCCESS) }))
        .route("/fail", get(|| async { Html(FAIL) }))
        .route("/health", get(|| async { "ok" }))
}
