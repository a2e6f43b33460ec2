//! Products API - REST server over PostgreSQL

use axum::Router;
use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{StartupPolicy, bootstrap, connect_lazy};
use migration::Migrator;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Assemble the full HTTP surface: `/api/*`, docs, `/health` and `/ready`.
async fn build_app(state: &AppState) -> std::io::Result<Router> {
    let health_routes = health_router(state.config.app).merge(api::health::router(state.clone()));

    create_router::<openapi::ApiDoc>(api::routes(state), health_routes, &state.config.cors).await
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // A malformed URL is a configuration error; an unreachable server is not.
    let startup_policy = config.database.startup_policy;
    let db = connect_lazy(config.database.clone()).await?;

    let report = bootstrap::<Migrator>(&db, config.app.name).await;
    if !report.is_ready() {
        match startup_policy {
            StartupPolicy::RequireReady => {
                return Err(eyre::eyre!(
                    "Database not ready at startup: {}",
                    report.error.as_deref().unwrap_or("unknown error")
                ));
            }
            StartupPolicy::FailOpen => {
                warn!("Serving without a ready database; store calls will fail until it is reachable")
            }
        }
    }

    let state = AppState {
        config,
        db,
        bootstrap: Arc::new(report),
    };

    let app = build_app(&state).await?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let db = state.db.clone();
    create_production_app(app, &state.config.server, Duration::from_secs(30), async move {
        close_postgres(db, "products").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
