// ============================================================================
// Infrastructure - Adapters behind the capability traits
// ============================================================================
//
// Console-backed stand-ins for the real gateway, mail server and database.
// Recording doubles for exercising the orchestrator are test-only.
//
// ============================================================================

pub mod card_gateway;
pub mod email;
pub mod sql;
#[cfg(test)]
pub mod recording;

pub use card_gateway::CardPaymentGateway;
pub use email::EmailNotifier;
pub use sql::SqlOrderRepository;
#[cfg(test)]
pub use recording::{
    Call, CallJournal, RecordingNotifier, RecordingRepository, ScriptedPaymentProcessor,
};
