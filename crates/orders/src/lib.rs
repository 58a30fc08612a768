//! Orders domain module: order placement.
//!
//! - `order`: the persisted order and its price-snapshotted line items
//! - `request`: validated order requests (what the customer asked for)
//! - `ports`: collaborator interfaces the workflow depends on (customer lookup,
//!   product lookup/stock update, order store)
//! - `service`: the order creation workflow itself
//!
//! No storage or HTTP lives here; adapters implement the ports elsewhere.

pub mod error;
pub mod order;
pub mod ports;
pub mod request;
pub mod service;

pub use error::OrderError;
pub use order::{Order, OrderId, OrderLineItem};
pub use ports::{CustomerLookup, OrderStore, ProductLookup, StockUpdate, StoreError};
pub use request::{OrderRequest, RequestedProduct};
pub use service::CreateOrderService;
