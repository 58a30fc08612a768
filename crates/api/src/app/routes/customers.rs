use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use orderflow_customers::{Customer, CustomerId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(register_customer).get(list_customers))
        .route("/:id", get(get_customer))
}

pub async fn register_customer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RegisterCustomerRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let customer = match Customer::new(CustomerId::generate(), body.into()) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.register_customer(customer.clone()) {
        return errors::registration_error_to_response(e);
    }

    tracing::info!(customer_id = %customer.id_typed(), "customer registered");
    (StatusCode::CREATED, Json(dto::customer_to_json(&customer))).into_response()
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CustomerId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.customers_get(id) {
        Ok(Some(c)) => (StatusCode::OK, Json(dto::customer_to_json(&c))).into_response(),
        Ok(None) => errors::not_found("customer"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let customers = match services.customers_list() {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };
    let items = customers.iter().map(dto::customer_to_json).collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
