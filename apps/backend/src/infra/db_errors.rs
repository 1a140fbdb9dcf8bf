//! SeaORM -> DomainError translation.
//!
//! Repos convert `sea_orm::DbErr` here; `AppError: From<DomainError>` does the rest.
//! Raw driver messages only reach logs, and only through `Redacted`.

use sea_orm::DbErr;
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

/// `table.column` from SQLite's "UNIQUE constraint failed: table.column".
fn sqlite_unique_target(msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = msg.find(MARKER)? + MARKER.len();
    msg[start..].split_whitespace().next()
}

/// Unique violations callers care about, by SQLite target or Postgres constraint name.
fn known_conflict(msg: &str) -> Option<(ConflictKind, &'static str)> {
    let sqlite = sqlite_unique_target(msg);

    if sqlite == Some("user_credentials.email") || msg.contains("user_credentials_email_key") {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    if sqlite == Some("user_credentials.user_id")
        || msg.contains("ux_user_credentials_user_id")
    {
        return Some((
            ConflictKind::Other("UniqueCredential".into()),
            "User already has credentials",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if is_unique_violation(&msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Unique constraint violation");
        if let Some((kind, detail)) = known_conflict(&msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&msg, "23503") || msg.contains("FOREIGN KEY constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Foreign key constraint violation");
        return DomainError::validation("Referenced record does not exist");
    }

    if mentions_sqlstate(&msg, "23514") || msg.contains("CHECK constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Check constraint violation");
        return DomainError::validation("Check constraint violation");
    }

    if msg.contains("timeout") || msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
