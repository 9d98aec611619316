use crate::domain::order::{Currency, UnknownCurrency};
use crate::utils::RetryConfig;

// ============================================================================
// Checkout Configuration
// ============================================================================

pub const CURRENCY_ENV: &str = "CHECKOUT_CURRENCY";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CheckoutConfig {
    /// Currency every charge is made in
    pub currency: Currency,
    /// Backoff applied to receipt delivery
    pub notification_retry: RetryConfig,
}

impl CheckoutConfig {
    /// Defaults, with the currency overridden by `CHECKOUT_CURRENCY` when set.
    pub fn from_env() -> Result<Self, UnknownCurrency> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, UnknownCurrency> {
        let mut config = Self::default();
        if let Some(code) = lookup(CURRENCY_ENV) {
            config.currency = code.parse()?;
        }
        Ok(config)
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_notification_retry(mut self, retry: RetryConfig) -> Self {
        self.notification_retry = retry;
        self
    }
}
