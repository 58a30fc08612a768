use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use orderflow_customers::{Customer, CustomerId};
use orderflow_orders::{
    CustomerLookup, Order, OrderId, OrderLineItem, OrderStore, ProductLookup, StockUpdate,
    StoreError,
};
use orderflow_products::{Product, ProductId};

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read()
        .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write()
        .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
}

/// In-memory customer registry.
///
/// Intended for tests/dev. Emails are unique across customers.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer. Rejects a duplicate id or an email already in use.
    pub fn insert(&self, customer: Customer) -> Result<(), StoreError> {
        let mut customers = write(&self.customers)?;

        if customers.contains_key(&customer.id_typed()) {
            return Err(StoreError::Rejected(format!(
                "customer {} already exists",
                customer.id_typed()
            )));
        }
        if customers.values().any(|c| c.email() == customer.email()) {
            return Err(StoreError::Rejected(format!(
                "email {} is already registered",
                customer.email()
            )));
        }

        customers.insert(customer.id_typed(), customer);
        Ok(())
    }

    pub fn get(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        Ok(read(&self.customers)?.get(&id).cloned())
    }

    /// All customers, in registration order (ids are time-ordered).
    pub fn list(&self) -> Result<Vec<Customer>, StoreError> {
        let mut customers: Vec<Customer> = read(&self.customers)?.values().cloned().collect();
        customers.sort_by_key(|c| c.id_typed());
        Ok(customers)
    }
}

#[async_trait]
impl CustomerLookup for InMemoryCustomerStore {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        self.get(id)
    }
}

/// In-memory product catalog with stock on hand.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product. Rejects a duplicate id or a name already in the catalog.
    pub fn insert(&self, product: Product) -> Result<(), StoreError> {
        let mut products = write(&self.products)?;

        if products.contains_key(&product.id_typed()) {
            return Err(StoreError::Rejected(format!(
                "product {} already exists",
                product.id_typed()
            )));
        }
        if products.values().any(|p| p.name() == product.name()) {
            return Err(StoreError::Rejected(format!(
                "a product named {:?} already exists",
                product.name()
            )));
        }

        products.insert(product.id_typed(), product);
        Ok(())
    }

    pub fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(read(&self.products)?.get(&id).cloned())
    }

    pub fn list(&self) -> Result<Vec<Product>, StoreError> {
        let mut products: Vec<Product> = read(&self.products)?.values().cloned().collect();
        products.sort_by_key(|p| p.id_typed());
        Ok(products)
    }

    /// Change a product's current price. Returns `false` if it does not exist.
    pub fn reprice(&self, id: ProductId, price: u64) -> Result<bool, StoreError> {
        let mut products = write(&self.products)?;
        match products.get_mut(&id) {
            Some(product) => {
                product.set_price(price);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ProductLookup for InMemoryProductStore {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let products = read(&self.products)?;
        let mut found: Vec<Product> = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(product) = products.get(id) {
                if !found.iter().any(|p| p.id_typed() == *id) {
                    found.push(product.clone());
                }
            }
        }
        Ok(found)
    }

    async fn update_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), StoreError> {
        // One write lock for the whole batch: either every product exists and
        // all updates land, or nothing changes.
        let mut products = write(&self.products)?;

        if let Some(missing) = updates.iter().find(|u| !products.contains_key(&u.product_id)) {
            return Err(StoreError::Rejected(format!(
                "cannot update stock of unknown product {}",
                missing.product_id
            )));
        }

        for update in &updates {
            if let Some(product) = products.get_mut(&update.product_id) {
                tracing::debug!(
                    product_id = %update.product_id,
                    from = product.quantity(),
                    to = update.quantity,
                    "stock updated"
                );
                product.set_quantity(update.quantity);
            }
        }

        Ok(())
    }
}

/// In-memory order store. Assigns UUIDv7 ids and `Utc::now()` timestamps.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        Ok(read(&self.orders)?.get(&id).cloned())
    }

    /// All orders, oldest first.
    pub fn list(&self) -> Result<Vec<Order>, StoreError> {
        let mut orders: Vec<Order> = read(&self.orders)?.values().cloned().collect();
        orders.sort_by_key(|o| (o.created_at(), o.id_typed()));
        Ok(orders)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(read(&self.orders)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(
        &self,
        customer: Customer,
        items: Vec<OrderLineItem>,
    ) -> Result<Order, StoreError> {
        let order = Order::new(OrderId::generate(), customer, items, Utc::now())
            .map_err(|e| StoreError::Rejected(e.to_string()))?;

        write(&self.orders)?.insert(order.id_typed(), order.clone());
        tracing::debug!(order_id = %order.id_typed(), items = order.items().len(), "order stored");

        Ok(order)
    }
}

/// The three in-memory stores, shared behind `Arc`s.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStores {
    pub customers: Arc<InMemoryCustomerStore>,
    pub products: Arc<InMemoryProductStore>,
    pub orders: Arc<InMemoryOrderStore>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }
}
