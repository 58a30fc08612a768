use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use orderflow_products::{Product, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/:id", get(get_product))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let product = match Product::new(ProductId::generate(), body.into()) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.add_product(product.clone()) {
        return errors::registration_error_to_response(e);
    }

    tracing::info!(
        product_id = %product.id_typed(),
        price = product.price(),
        quantity = product.quantity(),
        "product created"
    );
    (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_get(id) {
        Ok(Some(p)) => (StatusCode::OK, Json(dto::product_to_json(&p))).into_response(),
        Ok(None) => errors::not_found("product"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match services.products_list() {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };
    let items = products.iter().map(dto::product_to_json).collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
