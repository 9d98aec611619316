// ============================================================================
// Application Service - Checkout Orchestration
// ============================================================================
//
// Orchestrates: Order -> PaymentProcessor -> OrderRepository -> NotificationService
//
// ============================================================================

pub mod errors;
pub mod order_service;

pub use errors::CheckoutError;
pub use order_service::{CheckoutOutcome, OrderService};
