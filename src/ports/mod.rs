// ============================================================================
// Capability Interfaces - Ports for External Side Effects
// ============================================================================
//
// The orchestrator depends on these traits only. Concrete adapters live in
// `crate::infrastructure` and are chosen by the composition root.
//
// ============================================================================

pub mod payment;
pub mod notification;
pub mod repository;

pub use payment::{PaymentError, PaymentProcessor};
pub use notification::{NotificationError, NotificationService};
pub use repository::{OrderRepository, RepositoryError};
