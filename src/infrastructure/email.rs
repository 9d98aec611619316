use async_trait::async_trait;

use crate::domain::order::Order;
use crate::ports::{NotificationError, NotificationService};

// ============================================================================
// Email Receipt Notifier (simulated SMTP)
// ============================================================================

pub struct EmailNotifier {
    smtp_host: String,
    recipient: String,
}

impl EmailNotifier {
    pub fn new(smtp_host: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            smtp_host: smtp_host.into(),
            recipient: recipient.into(),
        }
    }
}

#[async_trait]
impl NotificationService for EmailNotifier {
    async fn send_receipt(&self, order: &Order) -> Result<(), NotificationError> {
        if !self.recipient.contains('@') {
            return Err(NotificationError::Permanent(format!(
                "invalid recipient address: {}",
                self.recipient
            )));
        }

        tracing::debug!(smtp_host = %self.smtp_host, "Connecting to SMTP server");
        tracing::info!(
            order_id = %order.id(),
            recipient = %self.recipient,
            total = %order.total(),
            items = order.item_count(),
            "Receipt sent"
        );

        Ok(())
    }
}
