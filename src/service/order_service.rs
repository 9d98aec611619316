use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::CheckoutConfig;
use crate::domain::order::{Currency, Order, OrderError};
use crate::ports::{NotificationService, OrderRepository, PaymentProcessor};
use crate::utils::{retry_on_transient, RetryResult};

use super::errors::CheckoutError;

// ============================================================================
// Order Service
// ============================================================================
//
// STARTED -> PAYMENT_ATTEMPTED -> { PAID_AND_FINALIZED | REJECTED }
//
// Only the traits are known here; adapters are handed in by the caller.
//
// ============================================================================

/// Terminal state of a checkout run
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Charged, marked paid and saved. `receipt_sent` is false when every
    /// delivery attempt failed.
    Completed {
        order_id: Uuid,
        total: Decimal,
        currency: Currency,
        receipt_sent: bool,
    },
    /// The gateway declined the charge; the order was left untouched.
    Rejected {
        order_id: Uuid,
        total: Decimal,
        currency: Currency,
    },
}

impl CheckoutOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutOutcome::Completed { .. })
    }

    pub fn total(&self) -> Decimal {
        match self {
            CheckoutOutcome::Completed { total, .. } | CheckoutOutcome::Rejected { total, .. } => {
                *total
            }
        }
    }
}

pub struct OrderService {
    payment: Arc<dyn PaymentProcessor>,
    notifier: Arc<dyn NotificationService>,
    repository: Arc<dyn OrderRepository>,
    config: CheckoutConfig,
}

impl OrderService {
    pub fn new(
        payment: Arc<dyn PaymentProcessor>,
        notifier: Arc<dyn NotificationService>,
        repository: Arc<dyn OrderRepository>,
    ) -> Self {
        Self::with_config(payment, notifier, repository, CheckoutConfig::default())
    }

    pub fn with_config(
        payment: Arc<dyn PaymentProcessor>,
        notifier: Arc<dyn NotificationService>,
        repository: Arc<dyn OrderRepository>,
        config: CheckoutConfig,
    ) -> Self {
        Self {
            payment,
            notifier,
            repository,
            config,
        }
    }

    /// Charge the order total and, on approval, mark paid, persist and send
    /// the receipt, in that order.
    ///
    /// A paid order is refused before the gateway is contacted. An empty
    /// order is charged a zero total like any other.
    pub async fn process_order(&self, order: &mut Order) -> Result<CheckoutOutcome, CheckoutError> {
        let order_id = order.id();
        let currency = self.config.currency;

        if order.is_paid() {
            return Err(OrderError::AlreadyPaid.into());
        }

        let total = order.total();

        tracing::info!(
            order_id = %order_id,
            total = %total,
            currency = %currency,
            items = order.item_count(),
            "Starting checkout"
        );

        let approved = self.payment.process(total, currency).await.map_err(|e| {
            tracing::error!(order_id = %order_id, error = %e, "Payment gateway failed");
            e
        })?;

        if !approved {
            tracing::warn!(order_id = %order_id, total = %total, "Payment rejected");
            return Ok(CheckoutOutcome::Rejected {
                order_id,
                total,
                currency,
            });
        }

        order.mark_as_paid()?;

        self.repository.save(order).await.map_err(|e| {
            tracing::error!(order_id = %order_id, error = %e, "Failed to save paid order");
            e
        })?;

        let receipt_sent = self.send_receipt(order).await;

        tracing::info!(
            order_id = %order_id,
            total = %total,
            receipt_sent = receipt_sent,
            "Order finalized"
        );

        Ok(CheckoutOutcome::Completed {
            order_id,
            total,
            currency,
            receipt_sent,
        })
    }

    async fn send_receipt(&self, order: &Order) -> bool {
        let result = retry_on_transient(&self.config.notification_retry, |_attempt| {
            self.notifier.send_receipt(order)
        })
        .await;

        match result {
            RetryResult::Success(()) => true,
            RetryResult::Failed(e) | RetryResult::PermanentFailure(e) => {
                tracing::warn!(order_id = %order.id(), error = %e, "Receipt not delivered");
                false
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
