use thiserror::Error;

use orderflow_customers::CustomerId;
use orderflow_products::ProductId;

use crate::ports::StoreError;

/// Why an order could not be placed.
///
/// The first four variants are business rejections (the caller has to change
/// the request); `Store` means a collaborator failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    #[error("products not found")]
    ProductsNotFound,

    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error(
        "insufficient stock for product {product_id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u64,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OrderError {
    /// Stable machine-readable code, used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::CustomerNotFound(_) => "customer_not_found",
            OrderError::ProductsNotFound => "products_not_found",
            OrderError::ProductNotFound(_) => "product_not_found",
            OrderError::InsufficientStock { .. } => "insufficient_stock",
            OrderError::Store(_) => "store_error",
        }
    }

    /// Whether the request itself was at fault (as opposed to infrastructure).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, OrderError::Store(_))
    }
}
