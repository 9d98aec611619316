use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::Order;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to encode order row: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert or replace the stored copy of the order.
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;

    async fn find(&self, id: Uuid) -> Result<Option<Order>, RepositoryError>;
}
