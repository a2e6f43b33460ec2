//! Application state management

use database::postgres::{BootstrapReport, DatabaseConnection};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
    /// Outcome of the startup bootstrap, reported by `/ready`
    pub bootstrap: Arc<BootstrapReport>,
}
