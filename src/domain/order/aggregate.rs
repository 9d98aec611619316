use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::{OrderItem, OrderStatus};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================
//
// Invariants:
// 1. Items are only created here, from primitive fields
// 2. Insertion order of items is kept
// 3. Status goes PENDING -> PAID exactly once
// 4. Items are frozen once the order is paid
// 5. The total always fits in a Decimal
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderRow")]
pub struct Order {
    id: Uuid,
    items: Vec<OrderItem>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    /// Create an empty, pending order
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            items: Vec::new(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            paid_at: None,
        }
    }

    /// Build a line item from primitive fields and append it.
    ///
    /// On error the item sequence is left untouched.
    pub fn add_item(
        &mut self,
        product_id: impl Into<String>,
        price: Decimal,
        quantity: i64,
    ) -> Result<(), OrderError> {
        if self.status != OrderStatus::Pending {
            return Err(OrderError::InvalidStatusTransition(self.status));
        }

        let item = OrderItem::new(product_id, price, quantity)?;
        self.total()
            .checked_add(item.subtotal())
            .ok_or(OrderError::AmountOverflow)?;
        self.items.push(item);

        Ok(())
    }

    /// Exact sum of all item subtotals
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Transition PENDING -> PAID. A second call is rejected.
    pub fn mark_as_paid(&mut self) -> Result<(), OrderError> {
        match self.status {
            OrderStatus::Pending => {
                self.status = OrderStatus::Paid;
                self.paid_at = Some(Utc::now());
                Ok(())
            }
            OrderStatus::Paid => Err(OrderError::AlreadyPaid),
        }
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }
}

/// Stored shape of an order; items are re-validated on the way in.
#[derive(Deserialize)]
struct OrderRow {
    id: Uuid,
    items: Vec<OrderItem>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
}

impl TryFrom<OrderRow> for Order {
    type Error = OrderError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let paid = row.status == OrderStatus::Paid;
        if paid != row.paid_at.is_some() {
            return Err(OrderError::InconsistentPaymentState {
                status: row.status,
                paid_at_set: row.paid_at.is_some(),
            });
        }

        row.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.subtotal()))
            .ok_or(OrderError::AmountOverflow)?;

        Ok(Self {
            id: row.id,
            items: row.items,
            status: row.status,
            created_at: row.created_at,
            paid_at: row.paid_at,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
