//! Database connection cleanup for graceful shutdown.

use tracing::{error, info};

/// Close a PostgreSQL pool (SeaORM), logging the outcome.
///
/// SeaORM's `DatabaseConnection` closes automatically on drop; closing it
/// explicitly waits for checked-out connections and records it in the logs.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "main").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
