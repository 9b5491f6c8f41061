use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// Query string for the state routes (`?name=...`).
#[derive(Debug, Default, Deserialize)]
pub struct StateQuery {
    pub name: Option<String>,
}

// -------------------------
// Response bodies
// -------------------------

/// Body returned when an order is accepted.
pub const ORDER_PLACED: &str = "Order Placed";
