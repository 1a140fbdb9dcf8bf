use crate::auth::password::CredentialHasher;
use crate::error::AppError;
use crate::infra::db::{bootstrap_db, DbKind};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    security: Option<SecurityConfig>,
    hasher: Option<CredentialHasher>,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = Some(security);
        self
    }

    pub fn with_hasher(mut self, hasher: CredentialHasher) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// There is no fallback signing secret, so `with_security` is mandatory.
    pub async fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security
            .ok_or_else(|| AppError::config("Security configuration is required"))?;
        let hasher = self.hasher.unwrap_or_default();

        match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => {
                let conn = bootstrap_db(kind).await?;
                Ok(AppState::new(conn, security, hasher))
            }
            None => Ok(AppState::without_db(security, hasher)),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
