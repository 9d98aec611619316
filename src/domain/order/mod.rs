// ============================================================================
// Order Domain - Aggregate Root and Line Items
// ============================================================================
//
// - Value objects (OrderItem, OrderStatus, Currency)
// - Errors (OrderError enum)
// - Aggregate (Order, owns its items)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
