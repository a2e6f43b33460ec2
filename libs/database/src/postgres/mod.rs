//! PostgreSQL database connector and utilities
//!
//! Provides connection management, the startup bootstrap, migration running,
//! and health checks.

mod bootstrap;
mod config;
mod connector;
mod health;

pub use bootstrap::{BootstrapReport, StartupPolicy, bootstrap};
pub use config::PostgresConfig;
pub use connector::{connect_lazy, run_migrations};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
