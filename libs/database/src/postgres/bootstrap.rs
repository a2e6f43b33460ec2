use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde::Serialize;
use strum::{Display, EnumString};
use tracing::{error, info};

use super::{check_health, run_migrations};

/// What the process does when the startup bootstrap fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum StartupPolicy {
    /// Keep serving; readiness reports the failure and store calls return 500.
    #[default]
    FailOpen,
    /// Exit before binding the listener.
    RequireReady,
}

/// Outcome of the one-time connect-and-migrate step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub connected: bool,
    pub schema_ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BootstrapReport {
    pub fn ready() -> Self {
        Self {
            connected: true,
            schema_ready: true,
            error: None,
        }
    }

    pub fn unreachable(error: impl Into<String>) -> Self {
        Self {
            connected: false,
            schema_ready: false,
            error: Some(error.into()),
        }
    }

    pub fn schema_failed(error: impl Into<String>) -> Self {
        Self {
            connected: true,
            schema_ready: false,
            error: Some(error.into()),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.connected && self.schema_ready
    }
}

/// Verify connectivity and bring the schema up to date.
///
/// Runs once at startup and never panics. The outcome is logged exactly once,
/// as success or as failure, and returned so the caller can apply its
/// [`StartupPolicy`] and expose the result through readiness.
pub async fn bootstrap<M: MigratorTrait>(db: &DatabaseConnection, app_name: &str) -> BootstrapReport {
    let report = match check_health(db).await {
        Err(e) => BootstrapReport::unreachable(e.to_string()),
        Ok(()) => match run_migrations::<M>(db, app_name).await {
            Ok(()) => BootstrapReport::ready(),
            Err(e) => BootstrapReport::schema_failed(format!("Migration failed: {}", e)),
        },
    };

    match &report.error {
        None => info!(app = app_name, "Database connected and schema is up to date"),
        Some(reason) => error!(
            app = app_name,
            connected = report.connected,
            "Database bootstrap failed: {}",
            reason
        ),
    }

    report
}
