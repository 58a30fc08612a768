use std::sync::Arc;

use orderflow_customers::{Customer, CustomerId};
use orderflow_infra::{
    InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore, InMemoryStores,
};
use orderflow_orders::{CreateOrderService, Order, OrderError, OrderId, OrderRequest, StoreError};
use orderflow_products::{Product, ProductId};

/// Order workflow wired over the in-memory stores.
pub type InMemoryCreateOrder = CreateOrderService<
    Arc<InMemoryCustomerStore>,
    Arc<InMemoryProductStore>,
    Arc<InMemoryOrderStore>,
>;

/// Application services (store backends + the order workflow).
pub enum AppServices {
    InMemory {
        stores: InMemoryStores,
        create_order: Arc<InMemoryCreateOrder>,
    },
}

/// Build the service graph. Only the in-memory backend exists today.
pub fn build_services() -> AppServices {
    let stores = InMemoryStores::new();
    let create_order = Arc::new(CreateOrderService::new(
        stores.customers.clone(),
        stores.products.clone(),
        stores.orders.clone(),
    ));

    AppServices::InMemory {
        stores,
        create_order,
    }
}

impl AppServices {
    fn stores(&self) -> &InMemoryStores {
        match self {
            AppServices::InMemory { stores, .. } => stores,
        }
    }

    pub async fn place_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        match self {
            AppServices::InMemory { create_order, .. } => create_order.execute(request).await,
        }
    }

    pub fn register_customer(&self, customer: Customer) -> Result<(), StoreError> {
        self.stores().customers.insert(customer)
    }

    pub fn customers_get(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        self.stores().customers.get(id)
    }

    pub fn customers_list(&self) -> Result<Vec<Customer>, StoreError> {
        self.stores().customers.list()
    }

    pub fn add_product(&self, product: Product) -> Result<(), StoreError> {
        self.stores().products.insert(product)
    }

    pub fn products_get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.stores().products.get(id)
    }

    pub fn products_list(&self) -> Result<Vec<Product>, StoreError> {
        self.stores().products.list()
    }

    pub fn orders_get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        self.stores().orders.get(id)
    }

    pub fn orders_list(&self) -> Result<Vec<Order>, StoreError> {
        self.stores().orders.list()
    }
}
