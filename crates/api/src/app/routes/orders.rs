use axum::{
    Json,
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};

use ordergate_orders::OrderDocument;

use crate::app::{dto, errors};
use crate::context::RequestContext;

/// `POST /order`: validate the submitted order and accept or reject it.
///
/// Missing or `null` properties are reported as violations, not as decode
/// errors; only a body that is not a JSON object is rejected outright.
pub async fn place_order(
    Extension(ctx): Extension<RequestContext>,
    body: Bytes,
) -> axum::response::Response {
    let document = match decode_order(&body) {
        Ok(doc) => doc,
        Err(msg) => {
            tracing::warn!(request_id = %ctx.request_id(), error = %msg, "undecodable order body");
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", msg);
        }
    };

    tracing::debug!(order = ?document, "order received");

    match document.into_validated() {
        Ok(order) => {
            // Placement into a downstream system would happen here.
            tracing::info!(
                order_id = %order.order_id,
                payment_terms = %order.payment_terms,
                currency = %order.currency,
                "order placed"
            );
            (StatusCode::OK, Json(dto::ORDER_PLACED)).into_response()
        }
        Err(err) => {
            tracing::info!(violations = err.messages().len(), "order rejected");
            errors::domain_error_to_response(err)
        }
    }
}

fn decode_order(body: &[u8]) -> Result<OrderDocument, String> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| format!("malformed JSON: {e}"))?;
    if !value.is_object() {
        return Err("order must be a JSON object".to_string());
    }
    serde_json::from_value(value).map_err(|e| format!("invalid order document: {e}"))
}
