use crate::domain::order::OrderError;
use crate::ports::{PaymentError, RepositoryError};

// ============================================================================
// Checkout Errors
// ============================================================================
//
// A declined charge is not an error; see `CheckoutOutcome::Rejected`.
// Receipt failures never surface here, they are logged and reported on the
// outcome instead.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Order cannot be checked out: {0}")]
    Order(#[from] OrderError),

    #[error("Payment could not be attempted: {0}")]
    Payment(#[from] PaymentError),

    #[error("Paid order could not be saved: {0}")]
    Persistence(#[from] RepositoryError),
}
