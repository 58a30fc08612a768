use serde::Deserialize;

use orderflow_customers::{Customer, NewCustomer};
use orderflow_orders::Order;
use orderflow_products::{NewProduct, Product};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterCustomerRequest {
    pub name: String,
    pub email: String,
}

impl From<RegisterCustomerRequest> for NewCustomer {
    fn from(body: RegisterCustomerRequest) -> Self {
        NewCustomer {
            name: body.name,
            email: body.email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    /// Smallest currency unit (cents).
    pub price: u64,
    pub quantity: u64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(body: CreateProductRequest) -> Self {
        NewProduct {
            name: body.name,
            price: body.price,
            quantity: body.quantity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderProductRequest {
    pub id: String,
    pub quantity: i64,
}

/// Ids stay strings here; they are parsed (and quantities checked) when the
/// body is turned into an `OrderRequest`.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    #[serde(default)]
    pub products: Vec<OrderProductRequest>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn customer_to_json(c: &Customer) -> serde_json::Value {
    serde_json::json!({
        "id": c.id_typed().to_string(),
        "name": c.name(),
        "email": c.email(),
    })
}

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id_typed().to_string(),
        "name": p.name(),
        "price": p.price(),
        "quantity": p.quantity(),
    })
}

pub fn order_to_json(o: &Order) -> serde_json::Value {
    serde_json::json!({
        "id": o.id_typed().to_string(),
        "customer": customer_to_json(o.customer()),
        "created_at": o.created_at().to_rfc3339(),
        "total": o.total(),
        "items": o.items().iter().map(|l| serde_json::json!({
            "product_id": l.product_id.to_string(),
            "quantity": l.quantity,
            "unit_price": l.unit_price,
        })).collect::<Vec<_>>()
    })
}
