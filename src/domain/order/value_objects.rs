use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// A single line of an order. Immutable once built; only `Order` creates them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "OrderItemRow")]
pub struct OrderItem {
    product_id: String,
    price: Decimal,
    quantity: u32,
}

impl OrderItem {
    pub(crate) fn new(
        product_id: impl Into<String>,
        price: Decimal,
        quantity: i64,
    ) -> Result<Self, OrderError> {
        let product_id = product_id.into();
        if product_id.trim().is_empty() {
            return Err(OrderError::EmptyProductId);
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(OrderError::NegativePrice(price));
        }
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        let quantity = u32::try_from(quantity).map_err(|_| OrderError::InvalidQuantity(quantity))?;
        price
            .checked_mul(Decimal::from(quantity))
            .ok_or(OrderError::AmountOverflow)?;

        Ok(Self {
            product_id,
            price,
            quantity,
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity, exact. Checked for overflow at construction.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Stored shape of a line item; re-validated through `OrderItem::new`.
#[derive(Deserialize)]
struct OrderItemRow {
    product_id: String,
    price: Decimal,
    quantity: i64,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = OrderError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        OrderItem::new(row.product_id, row.price, row.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO-4217 currency the payment gateway is asked to charge in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
