//! Per-IP rate limits for the API scopes. `/health` is not limited.

use std::time::Duration;

use actix_extensible_rate_limit::backend::SimpleInputFunctionBuilder;

const WINDOW: Duration = Duration::from_secs(60);

/// Signup and login: 5 requests per minute per IP.
pub fn auth_rate_limit_config() -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(WINDOW, 5).real_ip_key()
}

/// Everything else under `/api`: 100 requests per minute per IP.
pub fn api_rate_limit_config() -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(WINDOW, 100).real_ip_key()
}
