use std::env;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Listener and signing settings for the `backend` binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub security: SecurityConfig,
}

impl ServerConfig {
    /// `BACKEND_HOST` (default `0.0.0.0`), `BACKEND_PORT` (default `3001`)
    /// and the required, non-empty `BACKEND_JWT_SECRET`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => 3001,
        };

        let secret = env::var("BACKEND_JWT_SECRET").unwrap_or_default();
        if secret.trim().is_empty() {
            return Err(AppError::config("BACKEND_JWT_SECRET must be set and non-empty"));
        }

        Ok(Self {
            host,
            port,
            security: SecurityConfig::new(secret.into_bytes()),
        })
    }
}
