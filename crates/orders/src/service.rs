//! Order creation workflow.
//!
//! ```text
//! OrderRequest
//!   ↓
//! 1. Customer exists?                  → CustomerNotFound
//!   ↓
//! 2. Bulk product lookup non-empty?    → ProductsNotFound
//!   ↓
//! 3. Every requested id resolved?      → ProductNotFound(first missing, request order)
//!   ↓
//! 4. Every line within stock?          → InsufficientStock(first short line)
//!   ↓
//! 5. Snapshot prices, create order     (OrderStore::create)
//!   ↓
//! 6. Decrement stock, one call         (ProductLookup::update_quantities)
//!   ↓
//! Order
//! ```
//!
//! Nothing is written until steps 1–4 pass. Steps 5 and 6 are separate
//! collaborator calls; a failure in step 6 leaves the order persisted and is
//! reported as `OrderError::Store`.

use std::collections::HashMap;

use orderflow_products::{Product, ProductId};

use crate::error::OrderError;
use crate::order::{Order, OrderLineItem};
use crate::ports::{CustomerLookup, OrderStore, ProductLookup, StockUpdate};
use crate::request::{OrderRequest, RequestedProduct};

/// Places orders against injected customer, product and order collaborators.
///
/// Concurrent `execute` calls are not serialized here: two orders for the same
/// product can both pass the stock check before either decrement lands. See
/// [`crate::ports`] for what a storage adapter has to do about that.
#[derive(Debug)]
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrderService<C, P, O> {
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerLookup,
    P: ProductLookup,
    O: OrderStore,
{
    /// Validate `request`, persist the order and decrement stock.
    ///
    /// Duplicate product lines are validated one by one against the same
    /// fetched stock figure, not summed: two lines of 3 against a stock of 5
    /// both pass.
    ///
    /// An empty request is rejected with `ProductsNotFound` before any lookup,
    /// whatever the customer.
    #[tracing::instrument(
        name = "create_order",
        skip_all,
        fields(customer_id = %request.customer_id(), lines = request.lines().len())
    )]
    pub async fn execute(&self, request: OrderRequest) -> Result<Order, OrderError> {
        if request.is_empty() {
            return Err(OrderError::ProductsNotFound);
        }

        let customer_id = request.customer_id();
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or(OrderError::CustomerNotFound(customer_id))?;

        let found = self
            .products
            .find_all_by_id(&request.distinct_product_ids())
            .await?;
        if found.is_empty() {
            return Err(OrderError::ProductsNotFound);
        }

        let catalog: HashMap<ProductId, Product> =
            found.into_iter().map(|p| (p.id_typed(), p)).collect();

        let resolved = resolve_lines(&catalog, request.lines())?;
        ensure_stock(&resolved)?;

        let items = resolved
            .iter()
            .map(|(line, product)| {
                OrderLineItem::new(line.product_id(), line.quantity(), product.price())
            })
            .collect();

        // Computed before the order is written, from the stock seen in step 2.
        let updates = resolved
            .iter()
            .map(|(line, product)| StockUpdate {
                product_id: line.product_id(),
                quantity: product.quantity() - line.quantity(),
            })
            .collect();

        let order = self.orders.create(customer, items).await?;
        self.products.update_quantities(updates).await?;

        Ok(order)
    }
}

/// Pair every requested line with its fetched product, failing on the first
/// line (in request order) whose product was not returned.
fn resolve_lines<'a>(
    catalog: &'a HashMap<ProductId, Product>,
    lines: &'a [RequestedProduct],
) -> Result<Vec<(&'a RequestedProduct, &'a Product)>, OrderError> {
    lines
        .iter()
        .map(|line| {
            catalog
                .get(&line.product_id())
                .map(|product| (line, product))
                .ok_or(OrderError::ProductNotFound(line.product_id()))
        })
        .collect()
}

fn ensure_stock(resolved: &[(&RequestedProduct, &Product)]) -> Result<(), OrderError> {
    match resolved
        .iter()
        .find(|(line, product)| !product.has_stock_for(line.quantity()))
    {
        Some((line, product)) => Err(OrderError::InsufficientStock {
            product_id: line.product_id(),
            requested: line.quantity(),
            available: product.quantity(),
        }),
        None => Ok(()),
    }
}
