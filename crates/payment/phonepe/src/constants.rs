pub const PAY_ENDPOINT: &str = "/pg/v1/pay";
pub const STATUS_ENDPOINT: &str = "/pg/v1/status";

pub const CHECKSUM_SEPARATOR: &str = "###";

pub const X_VERIFY: &str = "X-VERIFY";
pub const X_MERCHANT_ID: &str = "X-MERCHANT-ID";
pub const APPLICATION_JSON: &str = "application/json";

pub const REDIRECT_MODE_POST: &str = "POST";
pub const PAY_PAGE: &str = "PAY_PAGE";

pub fn status_endpoint(merchant_id: &str, transaction_id: &str) -> String {
    format!("{STATUS_ENDPOINT}/{merchant_id}/{transaction_id}")
}
