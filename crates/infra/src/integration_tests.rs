//! Integration tests for the order placement pipeline.
//!
//! Tests: OrderRequest → CreateOrderService → in-memory stores
//!
//! Verifies:
//! - Rejected requests leave orders and stock untouched
//! - Missing products are reported in request order
//! - Prices are snapshotted and stock is decremented on success

use std::sync::Arc;

use orderflow_customers::{Customer, CustomerId, NewCustomer};
use orderflow_orders::{
    CreateOrderService, OrderError, OrderLineItem, OrderRequest, RequestedProduct,
};
use orderflow_products::{NewProduct, Product, ProductId};

use crate::store::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore, InMemoryStores};

type Service = CreateOrderService<
    Arc<InMemoryCustomerStore>,
    Arc<InMemoryProductStore>,
    Arc<InMemoryOrderStore>,
>;

fn setup() -> (Service, InMemoryStores) {
    let stores = InMemoryStores::new();
    let service = CreateOrderService::new(
        stores.customers.clone(),
        stores.products.clone(),
        stores.orders.clone(),
    );
    (service, stores)
}

fn register_customer(stores: &InMemoryStores, name: &str) -> CustomerId {
    let customer = Customer::new(
        CustomerId::generate(),
        NewCustomer {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        },
    )
    .unwrap();
    let id = customer.id_typed();
    stores.customers.insert(customer).unwrap();
    id
}

fn add_product(stores: &InMemoryStores, name: &str, price: u64, quantity: u64) -> ProductId {
    let product = Product::new(
        ProductId::generate(),
        NewProduct {
            name: name.to_string(),
            price,
            quantity,
        },
    )
    .unwrap();
    let id = product.id_typed();
    stores.products.insert(product).unwrap();
    id
}

fn stock(stores: &InMemoryStores, id: ProductId) -> u64 {
    stores.products.get(id).unwrap().unwrap().quantity()
}

fn order_request(customer_id: CustomerId, lines: &[(ProductId, i64)]) -> OrderRequest {
    OrderRequest::new(
        customer_id,
        lines
            .iter()
            .map(|(id, qty)| RequestedProduct::new(*id, *qty).unwrap())
            .collect(),
    )
}

#[tokio::test]
async fn unknown_customer_creates_nothing() {
    let (service, stores) = setup();
    let p = add_product(&stores, "Lamp", 1_000, 3);
    let missing = CustomerId::generate();

    let err = service
        .execute(order_request(missing, &[(p, 1)]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::CustomerNotFound(missing));
    assert!(stores.orders.is_empty().unwrap());
    assert_eq!(stock(&stores, p), 3);
}

#[tokio::test]
async fn unresolvable_products_are_products_not_found() {
    let (service, stores) = setup();
    let c = register_customer(&stores, "Grace");

    let err = service
        .execute(order_request(c, &[(ProductId::generate(), 1)]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::ProductsNotFound);
    assert!(stores.orders.is_empty().unwrap());
}

#[tokio::test]
async fn partial_resolution_reports_first_missing_in_request_order() {
    let (service, stores) = setup();
    let c = register_customer(&stores, "Grace");
    let a = ProductId::generate();
    let b = add_product(&stores, "B", 100, 10);

    let err = service
        .execute(order_request(c, &[(a, 1), (b, 1)]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::ProductNotFound(a));
    assert_eq!(err.to_string(), format!("product {a} not found"));
    assert_eq!(stock(&stores, b), 10);
}

#[tokio::test]
async fn stock_boundary_rejects_above_and_accepts_exact() {
    let (service, stores) = setup();
    let c = register_customer(&stores, "Grace");
    let x = add_product(&stores, "X", 100, 5);

    let err = service
        .execute(order_request(c, &[(x, 6)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InsufficientStock { product_id, .. } if product_id == x));
    assert_eq!(stock(&stores, x), 5);
    assert!(stores.orders.is_empty().unwrap());

    service.execute(order_request(c, &[(x, 5)])).await.unwrap();
    assert_eq!(stock(&stores, x), 0);
}

#[tokio::test]
async fn stored_order_keeps_price_after_repricing() {
    let (service, stores) = setup();
    let c = register_customer(&stores, "Grace");
    let y = add_product(&stores, "Y", 1_000, 4);

    let order = service.execute(order_request(c, &[(y, 1)])).await.unwrap();
    assert_eq!(order.items()[0].unit_price, 1_000);

    assert!(stores.products.reprice(y, 2_000).unwrap());

    let stored = stores.orders.get(order.id_typed()).unwrap().unwrap();
    assert_eq!(stored.items()[0].unit_price, 1_000);
    assert_eq!(stores.products.get(y).unwrap().unwrap().price(), 2_000);
}

#[tokio::test]
async fn happy_path_end_to_end() {
    let (service, stores) = setup();
    let c1 = register_customer(&stores, "C1");
    let p1 = add_product(&stores, "P1", 300, 10);
    let p2 = add_product(&stores, "P2", 500, 2);

    let order = service
        .execute(order_request(c1, &[(p1, 2), (p2, 2)]))
        .await
        .unwrap();

    assert_eq!(order.customer().id_typed(), c1);
    assert_eq!(
        order.items(),
        &[
            OrderLineItem::new(p1, 2, 300),
            OrderLineItem::new(p2, 2, 500),
        ]
    );
    assert_eq!(order.total(), Some(1_600));
    assert_eq!(stock(&stores, p1), 8);
    assert_eq!(stock(&stores, p2), 0);
    assert_eq!(stores.orders.get(order.id_typed()).unwrap(), Some(order));
}

#[tokio::test]
async fn empty_product_list_is_always_products_not_found() {
    let (service, stores) = setup();
    let c = register_customer(&stores, "Grace");

    for customer in [c, CustomerId::generate()] {
        let err = service
            .execute(order_request(customer, &[]))
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::ProductsNotFound);
    }
    assert!(stores.orders.is_empty().unwrap());
}

#[tokio::test]
async fn duplicate_lines_validate_against_original_stock() {
    let (service, stores) = setup();
    let c = register_customer(&stores, "Grace");
    let p = add_product(&stores, "P", 100, 5);

    // Each line of 3 fits the fetched stock of 5 on its own; the combined
    // demand of 6 is not checked. Stock ends at 5 - 3 (last update wins).
    let order = service
        .execute(order_request(c, &[(p, 3), (p, 3)]))
        .await
        .unwrap();

    assert_eq!(order.items().len(), 2);
    assert_eq!(stock(&stores, p), 2);
}

#[tokio::test]
async fn sequential_orders_see_previous_decrements() {
    let (service, stores) = setup();
    let c = register_customer(&stores, "Grace");
    let p = add_product(&stores, "P", 100, 5);

    service.execute(order_request(c, &[(p, 3)])).await.unwrap();
    let err = service
        .execute(order_request(c, &[(p, 3)]))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderError::InsufficientStock {
            product_id: p,
            requested: 3,
            available: 2,
        }
    );
    assert_eq!(stores.orders.len().unwrap(), 1);
}
