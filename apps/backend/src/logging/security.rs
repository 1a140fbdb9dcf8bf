//! Security event logging. Emails are always masked.

use tracing::{error, warn};

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A login attempt that did not produce a token.
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// A stored password hash that could not be parsed.
pub fn credential_corrupted(user_id: &str) {
    let trace_id = trace_ctx::trace_id();

    error!(
        event = "SECURITY_CREDENTIAL_CORRUPTED",
        %trace_id,
        user_id,
        "Stored credential hash is malformed"
    );
}
