use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::order::Currency;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment gateway unavailable: {0}")]
    GatewayUnavailable(String),

    #[error("Payment gateway returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Charges an amount in a single attempt.
///
/// `Ok(false)` is a declined charge, a normal outcome. `Err` means the
/// gateway could not give an answer at all.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process(&self, amount: Decimal, currency: Currency) -> Result<bool, PaymentError>;
}
