//! Collaborator interfaces consumed by the order workflow.
//!
//! The workflow only ever talks to storage through these three traits. Adapters
//! (in-memory, SQL, remote services) implement them outside this crate.
//!
//! ## Consistency boundary
//!
//! Each call is independent from the workflow's point of view. In particular,
//! the stock check done by the workflow and the later
//! [`ProductLookup::update_quantities`] call are **not** atomic with respect to
//! other concurrent orders: two orders racing for the last units can both pass
//! validation. Implementations that must not oversell need their own locking or
//! conditional updates (e.g. `UPDATE ... WHERE quantity >= $n`).

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderflow_customers::{Customer, CustomerId};
use orderflow_products::{Product, ProductId};

use crate::order::{Order, OrderLineItem};

/// Collaborator failure (storage unreachable, write rejected, ...).
///
/// These are infrastructure errors, as opposed to the classified business
/// failures in [`crate::OrderError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store rejected the write: {0}")]
    Rejected(String),
}

/// New absolute stock level for one product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Customer lookup by id.
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    /// `Ok(None)` when no customer has this id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;
}

/// Bulk product lookup and stock updates.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Return the products that exist among `ids`.
    ///
    /// Missing ids are silently left out (never an error); empty input yields
    /// an empty result. Result order is unspecified.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError>;

    /// Overwrite stock levels.
    ///
    /// All updates of one call are applied together, in order; if the same
    /// product appears more than once the last entry wins.
    async fn update_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), StoreError>;
}

/// Order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order, assigning its id and creation timestamp.
    async fn create(
        &self,
        customer: Customer,
        items: Vec<OrderLineItem>,
    ) -> Result<Order, StoreError>;
}

#[async_trait]
impl<S> CustomerLookup for Arc<S>
where
    S: CustomerLookup + ?Sized,
{
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        (**self).find_by_id(id).await
    }
}

#[async_trait]
impl<S> ProductLookup for Arc<S>
where
    S: ProductLookup + ?Sized,
{
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError> {
        (**self).find_all_by_id(ids).await
    }

    async fn update_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), StoreError> {
        (**self).update_quantities(updates).await
    }
}

#[async_trait]
impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    async fn create(
        &self,
        customer: Customer,
        items: Vec<OrderLineItem>,
    ) -> Result<Order, StoreError> {
        (**self).create(customer, items).await
    }
}
