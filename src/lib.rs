//! Order checkout in a ports-and-adapters layout.
//!
//! `domain` holds the `Order` aggregate, `ports` the capability traits for
//! payment, notification and persistence, `service` the orchestrator that
//! drives a checkout through them, and `infrastructure` the adapters.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod service;
pub mod utils;

pub use config::CheckoutConfig;
pub use domain::order::{Currency, Order, OrderError, OrderItem, OrderStatus};
pub use service::{CheckoutError, CheckoutOutcome, OrderService};
