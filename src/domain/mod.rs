// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Pure checkout domain: the Order aggregate and its line items.
// Nothing in here knows about payment gateways, mail servers or databases;
// those live behind the capability traits in `crate::ports`.
//
// ============================================================================

pub mod order;
