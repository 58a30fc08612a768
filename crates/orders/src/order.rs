use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderflow_core::{aggregate_id_newtype, DomainError, DomainResult, Entity, ValueObject};
use orderflow_customers::Customer;
use orderflow_products::ProductId;

aggregate_id_newtype!(
    /// Order identifier (assigned by the order store).
    OrderId,
    "OrderId"
);

/// Order line: product, quantity, unit price at the time the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub quantity: u64,
    /// Price in smallest currency unit (e.g., cents), frozen at order time.
    pub unit_price: u64,
}

impl OrderLineItem {
    pub fn new(product_id: ProductId, quantity: u64, unit_price: u64) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
        }
    }

    /// `quantity * unit_price`, or `None` on overflow.
    pub fn line_total(&self) -> Option<u64> {
        self.quantity.checked_mul(self.unit_price)
    }
}

impl ValueObject for OrderLineItem {}

/// A placed order.
///
/// Line items are fixed at construction; there is no way to reprice or edit
/// them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    items: Vec<OrderLineItem>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Materialize an order. Stores call this when persisting.
    ///
    /// Rejects an empty line-item list.
    pub fn new(
        id: OrderId,
        customer: Customer,
        items: Vec<OrderLineItem>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::validation("order must have at least one line item"));
        }

        Ok(Self {
            id,
            customer,
            items,
            created_at,
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sum of all line totals, or `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.line_total()?))
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
