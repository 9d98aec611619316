use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::order::Currency;
use crate::ports::{PaymentError, PaymentProcessor};

// ============================================================================
// Card Payment Gateway (simulated)
// ============================================================================

/// Stands in for a hosted card gateway. Approves every charge up to an
/// optional limit; anything above it is declined.
pub struct CardPaymentGateway {
    card_last_four: String,
    limit: Option<Decimal>,
}

impl CardPaymentGateway {
    pub fn new(card_number: &str) -> Self {
        let digits: Vec<char> = card_number.chars().filter(char::is_ascii_digit).collect();
        let start = digits.len().saturating_sub(4);

        Self {
            card_last_four: digits[start..].iter().collect(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Decimal) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn card_last_four(&self) -> &str {
        &self.card_last_four
    }
}

#[async_trait]
impl PaymentProcessor for CardPaymentGateway {
    async fn process(&self, amount: Decimal, currency: Currency) -> Result<bool, PaymentError> {
        if self.card_last_four.is_empty() {
            return Err(PaymentError::InvalidResponse("no card on file".to_string()));
        }

        tracing::debug!(card = %self.card_last_four, "Connecting to card gateway");

        let approved = self.limit.map_or(true, |limit| amount <= limit);

        tracing::info!(
            amount = %amount,
            currency = %currency,
            card = %format!("*{}", self.card_last_four),
            approved = approved,
            "Charge attempted"
        );

        Ok(approved)
    }
}
