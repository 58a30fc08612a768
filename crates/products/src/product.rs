use serde::{Deserialize, Serialize};

use orderflow_core::{aggregate_id_newtype, DomainError, DomainResult, Entity};

aggregate_id_newtype!(
    /// Product identifier.
    ProductId,
    "ProductId"
);

/// Input for adding a product to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    /// Units on hand.
    pub quantity: u64,
}

/// Product: a catalog entry with its current price and stock on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    quantity: u64,
}

impl Product {
    pub fn new(id: ProductId, input: NewProduct) -> DomainResult<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            price: input.price,
            quantity: input.quantity,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Whether `requested` units can be taken from current stock.
    pub fn has_stock_for(&self, requested: u64) -> bool {
        requested <= self.quantity
    }

    /// Overwrite stock on hand (stock updates carry absolute quantities).
    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    /// Reprice the product. Orders already placed keep their snapshot price.
    pub fn set_price(&mut self, price: u64) {
        self.price = price;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
