use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::order::{Currency, Order, OrderStatus};
use crate::ports::{
    NotificationError, NotificationService, OrderRepository, PaymentError, PaymentProcessor,
    RepositoryError,
};

// ============================================================================
// Recording Doubles
// ============================================================================
//
// Each double appends to a shared journal so callers can assert both how
// often a port was hit and in which order the ports were hit.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Charge { amount: Decimal, currency: Currency },
    Save { order_id: Uuid, status: OrderStatus, total: Decimal },
    SendReceipt { order_id: Uuid, total: Decimal },
}

#[derive(Clone, Default)]
pub struct CallJournal {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallJournal {
    pub fn new() -> Self {
        Self::default()
    }

    async fn record(&self, call: Call) {
        self.calls.lock().await.push(call);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    pub async fn charges(&self) -> usize {
        self.count(|c| matches!(c, Call::Charge { .. })).await
    }

    pub async fn saves(&self) -> usize {
        self.count(|c| matches!(c, Call::Save { .. })).await
    }

    pub async fn receipts(&self) -> usize {
        self.count(|c| matches!(c, Call::SendReceipt { .. })).await
    }

    async fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().await.iter().filter(|&c| predicate(c)).count()
    }
}

/// Answers every charge with the same scripted reply.
pub struct ScriptedPaymentProcessor {
    journal: CallJournal,
    reply: Result<bool, PaymentError>,
}

impl ScriptedPaymentProcessor {
    pub fn approving(journal: CallJournal) -> Self {
        Self { journal, reply: Ok(true) }
    }

    pub fn declining(journal: CallJournal) -> Self {
        Self { journal, reply: Ok(false) }
    }

    pub fn failing(journal: CallJournal, error: PaymentError) -> Self {
        Self { journal, reply: Err(error) }
    }
}

#[async_trait]
impl PaymentProcessor for ScriptedPaymentProcessor {
    async fn process(&self, amount: Decimal, currency: Currency) -> Result<bool, PaymentError> {
        self.journal.record(Call::Charge { amount, currency }).await;
        self.reply.clone()
    }
}

/// Fails with the queued errors first, then delivers.
pub struct RecordingNotifier {
    journal: CallJournal,
    failures: Mutex<VecDeque<NotificationError>>,
}

impl RecordingNotifier {
    pub fn new(journal: CallJournal) -> Self {
        Self::failing_with(journal, Vec::new())
    }

    pub fn failing_with(journal: CallJournal, failures: Vec<NotificationError>) -> Self {
        Self {
            journal,
            failures: Mutex::new(failures.into()),
        }
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn send_receipt(&self, order: &Order) -> Result<(), NotificationError> {
        self.journal
            .record(Call::SendReceipt {
                order_id: order.id(),
                total: order.total(),
            })
            .await;

        match self.failures.lock().await.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Keeps saved orders in memory; can be told to reject every write.
pub struct RecordingRepository {
    journal: CallJournal,
    orders: Mutex<Vec<Order>>,
    unavailable: Option<String>,
}

impl RecordingRepository {
    pub fn new(journal: CallJournal) -> Self {
        Self {
            journal,
            orders: Mutex::new(Vec::new()),
            unavailable: None,
        }
    }

    pub fn unavailable(journal: CallJournal, reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::new(journal)
        }
    }
}

#[async_trait]
impl OrderRepository for RecordingRepository {
    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        self.journal
            .record(Call::Save {
                order_id: order.id(),
                status: order.status(),
                total: order.total(),
            })
            .await;

        if let Some(reason) = &self.unavailable {
            return Err(RepositoryError::Unavailable(reason.clone()));
        }

        let mut orders = self.orders.lock().await;
        orders.retain(|o| o.id() != order.id());
        orders.push(order.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.lock().await;
        Ok(orders.iter().find(|o| o.id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_journal_is_shared_between_doubles() {
        let journal = CallJournal::new();
        let payment = ScriptedPaymentProcessor::declining(journal.clone());
        let notifier = RecordingNotifier::new(journal.clone());

        let order = Order::new();
        assert!(!payment.process(Decimal::ONE, Currency::Usd).await.unwrap());
        notifier.send_receipt(&order).await.unwrap();

        let calls = journal.calls().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            Call::Charge {
                amount: Decimal::ONE,
                currency: Currency::Usd
            }
        );
        assert_eq!(journal.receipts().await, 1);
    }

    #[tokio::test]
    async fn test_notifier_drains_scripted_failures() {
        let journal = CallJournal::new();
        let notifier = RecordingNotifier::failing_with(
            journal.clone(),
            vec![NotificationError::Transient("busy".to_string())],
        );
        let order = Order::new();

        assert!(notifier.send_receipt(&order).await.is_err());
        assert!(notifier.send_receipt(&order).await.is_ok());
        assert_eq!(journal.receipts().await, 2);
    }

    #[tokio::test]
    async fn test_unavailable_repository_records_attempt() {
        let journal = CallJournal::new();
        let repo = RecordingRepository::unavailable(journal.clone(), "disk full");
        let order = Order::new();

        let result = repo.save(&order).await;
        assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
        assert_eq!(journal.saves().await, 1);
        assert!(repo.find(order.id()).await.unwrap().is_none());
    }
}
