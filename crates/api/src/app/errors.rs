use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ordergate_core::DomainError;
use ordergate_states::StateSearchError;

/// Prefix of the message returned when an order is rejected.
pub const ORDER_REJECTED_PREFIX: &str = "The following errors were found in the provided order - ";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(messages) => validation_error(messages),
        DomainError::InvalidInput(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_input", msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
    }
}

/// A failed lookup is a 404; anything else means the loaded records are
/// unusable and is a server fault.
pub fn state_search_error_to_response(err: StateSearchError) -> axum::response::Response {
    match err {
        StateSearchError::NoMatch(_) => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        other => {
            tracing::error!(error = %other, "state information is unusable");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_data_error",
                other.to_string(),
            )
        }
    }
}

/// 400 carrying every rule violation, both as one message and as a list.
pub fn validation_error(messages: Vec<String>) -> axum::response::Response {
    let joined = serde_json::to_string(&messages).unwrap_or_default();
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "message": format!("{ORDER_REJECTED_PREFIX}{joined}"),
            "errors": messages,
        })),
    )
        .into_response()
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
