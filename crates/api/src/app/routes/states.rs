use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(search_states))
        .route("/abbreviation", get(state_abbreviation))
}

/// `GET /states?name=..`: every record whose name contains the query.
pub async fn search_states(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::StateQuery>,
) -> axum::response::Response {
    let Some(name) = query.name else {
        return missing_name();
    };

    match services.states.search_by_name(&name) {
        Ok(found) => (StatusCode::OK, Json(found)).into_response(),
        Err(e) => errors::state_search_error_to_response(e),
    }
}

/// `GET /states/abbreviation?name=..`: abbreviation of the first match.
pub async fn state_abbreviation(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::StateQuery>,
) -> axum::response::Response {
    let Some(name) = query.name else {
        return missing_name();
    };

    match services.states.abbreviation_for(&name) {
        Ok(abbreviation) => (StatusCode::OK, Json(abbreviation)).into_response(),
        Err(e) => errors::state_search_error_to_response(e),
    }
}

fn missing_name() -> axum::response::Response {
    errors::json_error(
        StatusCode::BAD_REQUEST,
        "missing_parameter",
        "query parameter 'name' is required",
    )
}
