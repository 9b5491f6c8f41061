use axum::{Router, routing::post};

pub mod orders;
pub mod states;
pub mod system;

/// Router for every endpoint except `/health`.
pub fn router() -> Router {
    Router::new()
        .route("/order", post(orders::place_order))
        .nest("/states", states::router())
}
