use rust_decimal::Decimal;

use super::value_objects::OrderStatus;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Invalid item price: {0}")]
    NegativePrice(Decimal),

    #[error("Product id cannot be empty")]
    EmptyProductId,

    #[error("Order is already paid")]
    AlreadyPaid,

    #[error("Order amount exceeds the representable range")]
    AmountOverflow,

    #[error("Stored order is inconsistent: status {status}, paid_at present: {paid_at_set}")]
    InconsistentPaymentState { status: OrderStatus, paid_at_set: bool },

    #[error("Cannot modify order in status: {0}")]
    InvalidStatusTransition(OrderStatus),
}

impl OrderError {
    /// True for errors raised while validating the arguments of a new line item.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            OrderError::InvalidQuantity(_)
                | OrderError::NegativePrice(_)
                | OrderError::EmptyProductId
                | OrderError::AmountOverflow
        )
    }
}
