use async_trait::async_trait;

use crate::domain::order::Order;
use crate::utils::IsTransient;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotificationError {
    #[error("Temporary delivery failure: {0}")]
    Transient(String),

    #[error("Delivery rejected: {0}")]
    Permanent(String),
}

impl IsTransient for NotificationError {
    fn is_transient(&self) -> bool {
        matches!(self, NotificationError::Transient(_))
    }
}

/// Best-effort receipt delivery for a paid order.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send_receipt(&self, order: &Order) -> Result<(), NotificationError>;
}
