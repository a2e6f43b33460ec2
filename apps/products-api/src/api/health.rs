//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;
use serde_json::Value;

use crate::state::AppState;

/// Live store ping plus the startup bootstrap outcome.
///
/// A store that comes back after a failed bootstrap still reports
/// `schema: down` until the service restarts and migrates.
async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "database",
            Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
        ),
        (
            "schema",
            Box::pin(async {
                match &state.bootstrap.error {
                    None if state.bootstrap.is_ready() => Ok(()),
                    None => Err("Schema not initialised".to_string()),
                    Some(reason) => Err(reason.clone()),
                }
            }),
        ),
    ];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
