use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderflow_core::DomainError;
use orderflow_orders::{OrderError, StoreError};

/// Workflow failures. Every business rejection is a 400; collaborator
/// failures are a 500.
pub fn order_error_to_response(err: OrderError) -> axum::response::Response {
    let status = if err.is_rejection() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    json_error(status, err.code(), err.to_string())
}

/// Failures while registering a customer or product: a rejected insert is a
/// uniqueness conflict.
pub fn registration_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Rejected(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        StoreError::Unavailable(_) => store_error_to_response(err),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store failure");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

/// A body that is not valid JSON for the expected shape (wrong types, missing
/// fields, negative amounts) is a validation error like any other.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

pub fn not_found(what: &str) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("{what} not found"))
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
