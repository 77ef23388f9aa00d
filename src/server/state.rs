//! Application state shared across all request handlers.
//!
//! `AppState` holds the long-lived handles built once during startup: the database
//! connection pool and the parsed template set. Axum clones it for each request.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::template::Templates;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Templates>` is a reference-counted pointer to the read-only template set
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by every request and every calculation task.
    pub db: DatabaseConnection,

    /// Templates loaded from the template directory at startup.
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `templates` - Parsed template set
    pub fn new(db: DatabaseConnection, templates: Templates) -> Self {
        Self {
            db,
            templates: Arc::new(templates),
        }
    }
}
