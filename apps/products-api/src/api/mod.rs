//! API routes module

pub mod health;
pub mod products;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Create all API routes, mounted under `/api` by the server
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(api_root))
        .nest("/products", products::router(state))
}

/// Diagnostic endpoint confirming the API is mounted
async fn api_root() -> Json<Value> {
    Json(json!({ "msg": "From API" }))
}
