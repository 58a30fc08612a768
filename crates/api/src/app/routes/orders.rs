use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use orderflow_orders::{OrderError, OrderId, OrderRequest};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order))
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateOrderRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let request = match OrderRequest::parse(
        &body.customer_id,
        body.products.iter().map(|p| (p.id.as_str(), p.quantity)),
    ) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let customer_id = request.customer_id();

    let order = match services.place_order(request).await {
        Ok(o) => o,
        Err(e) => {
            log_rejection(&e);
            return errors::order_error_to_response(e);
        }
    };

    tracing::info!(
        order_id = %order.id_typed(),
        customer_id = %customer_id,
        items = order.items().len(),
        "order placed"
    );
    (StatusCode::CREATED, Json(dto::order_to_json(&order))).into_response()
}

fn log_rejection(err: &OrderError) {
    if err.is_rejection() {
        tracing::warn!(code = err.code(), error = %err, "order rejected");
    } else {
        tracing::error!(error = %err, "order placement failed");
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders_get(id) {
        Ok(Some(o)) => (StatusCode::OK, Json(dto::order_to_json(&o))).into_response(),
        Ok(None) => errors::not_found("order"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let orders = match services.orders_list() {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };
    let items = orders.iter().map(dto::order_to_json).collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
