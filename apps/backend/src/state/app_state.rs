use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::password::CredentialHasher;

/// Shared, read-only application state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Optional so routes that need no database can be tested without one
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    pub hasher: CredentialHasher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig, hasher: CredentialHasher) -> Self {
        Self {
            db: Some(db),
            security,
            hasher,
        }
    }

    pub fn without_db(security: SecurityConfig, hasher: CredentialHasher) -> Self {
        Self {
            db: None,
            security,
            hasher,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
