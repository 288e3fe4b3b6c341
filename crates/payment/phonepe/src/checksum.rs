use sha2::{Digest, Sha256};

use crate::constants::CHECKSUM_SEPARATOR;

/// X-VERIFY value: `sha256(payload + endpoint + salt)` in hex, then `###` and the key index.
///
/// `payload` is the base64 request body, or empty for GET calls.
pub fn checksum(payload: &str, endpoint: &str, salt_key: &str, key_index: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hasher.update(endpoint.as_bytes());
    hasher.update(salt_key.as_bytes());
    let hash = hex::encode(hasher.finalize());
    format!("{hash}{CHECKSUM_SEPARATOR}{key_index}")
}
