use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::order::Order;
use crate::ports::{OrderRepository, RepositoryError};

// ============================================================================
// SQL Order Repository (simulated)
// ============================================================================
//
// Logs the parameterized statement a real driver would run and keeps the
// row payload (JSON) in memory, keyed by order id.
//
// ============================================================================

const UPSERT_ORDER: &str = "INSERT INTO orders (id, status, total, payload) VALUES (?, ?, ?, ?) \
     ON CONFLICT (id) DO UPDATE SET status = excluded.status, total = excluded.total, payload = excluded.payload";

#[derive(Default)]
pub struct SqlOrderRepository {
    rows: Mutex<HashMap<Uuid, String>>,
}

impl SqlOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn row_count(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[async_trait]
impl OrderRepository for SqlOrderRepository {
    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let payload = serde_json::to_string(order)?;

        tracing::debug!(statement = UPSERT_ORDER, "Executing SQL");

        self.rows.lock().await.insert(order.id(), payload);

        tracing::info!(
            order_id = %order.id(),
            status = %order.status(),
            total = %order.total(),
            "Order row saved"
        );

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let rows = self.rows.lock().await;
        match rows.get(&id) {
            Some(payload) => Ok(Some(serde_json::from_str(payload)?)),
            None => Ok(None),
        }
    }
}
