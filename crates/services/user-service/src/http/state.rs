//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::CreateUser;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub create_user: Arc<dyn CreateUser>,
    /// Present only when users live in PostgreSQL
    pub database: Option<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(create_user: Arc<dyn CreateUser>, database: Option<Database>) -> Self {
        Self {
            create_user,
            database,
        }
    }
}
