use std::sync::Arc;

use rust_decimal::Decimal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use checkout_service::infrastructure::{CardPaymentGateway, EmailNotifier, SqlOrderRepository};
use checkout_service::ports::OrderRepository;
use checkout_service::{CheckoutConfig, CheckoutOutcome, Order, OrderService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,checkout_service=debug")),
        )
        .init();

    let config = CheckoutConfig::from_env()?;
    tracing::info!(currency = %config.currency, "Starting checkout demo");

    // === 1. Choose adapters (composition root) ===
    let payment = Arc::new(CardPaymentGateway::new("4242424242424242"));
    let notifier = Arc::new(EmailNotifier::new("smtp.example.com:587", "customer@example.com"));
    let repository = Arc::new(SqlOrderRepository::new());

    // === 2. Inject them ===
    let service = OrderService::with_config(payment, notifier, repository.clone(), config);

    // === 3. Build the order; the order creates its own items ===
    let mut order = Order::new();
    order.add_item("Monitor 4K", Decimal::new(30000, 2), 1)?;
    order.add_item("Cable HDMI", Decimal::new(1500, 2), 2)?;

    // === 4. Run the checkout ===
    match service.process_order(&mut order).await? {
        CheckoutOutcome::Completed { order_id, total, currency, receipt_sent } => {
            tracing::info!(%order_id, %total, %currency, receipt_sent, "✅ Checkout completed");
        }
        CheckoutOutcome::Rejected { order_id, total, .. } => {
            tracing::warn!(%order_id, %total, "❌ Payment was rejected");
        }
    }

    if let Some(stored) = repository.find(order.id()).await? {
        tracing::info!(order_id = %stored.id(), status = %stored.status(), "Stored order");
    }

    Ok(())
}
