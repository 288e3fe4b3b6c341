use crate::{
    amount::Amount,
    errors::PaymentError,
    ids::{MerchantUserId, TransactionId},
    phone::Phone,
};

pub const MIN_NAME_LEN: usize = 2;

/// Length is counted in UTF-16 units, the same way the browser form counts it.
pub fn validate_name(name: &str) -> Result<(), PaymentError> {
    if name.encode_utf16().count() < MIN_NAME_LEN {
        return Err(PaymentError::InvalidName);
    }
    Ok(())
}

/// A single payment attempt. Lives for one gateway call and is never stored.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub name: String,
    pub phone: Phone,
    pub amount: Amount,
    pub transaction_id: TransactionId,
    pub user_id: MerchantUserId,
}

impl PaymentRequest {
    pub fn new(name: String, phone: Phone, amount: Amount) -> Result<Self, PaymentError> {
        Self::with_ids(
            name,
            phone,
            amount,
            TransactionId::generate(),
            MerchantUserId::generate(),
        )
    }

    pub fn with_ids(
        name: String,
        phone: Phone,
        amount: Amount,
        transaction_id: TransactionId,
        user_id: MerchantUserId,
    ) -> Result<Self, PaymentError> {
        validate_name(&name)?;
        Ok(PaymentRequest {
            name,
            phone,
            amount,
            transaction_id,
            user_id,
        })
    }
}
