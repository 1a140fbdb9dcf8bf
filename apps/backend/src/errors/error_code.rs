//! Error codes for the Wedding Mate API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that
//! appears in the `code` field of a Problem Details response.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Missing, malformed, forged or expired bearer token
    Unauthorized,
    /// Unknown email or wrong password (deliberately indistinguishable)
    InvalidCredentials,

    // Request validation
    /// Field-level validation failure
    ValidationError,
    /// Unparseable request (bad JSON, unreadable body)
    BadRequest,
    /// Path id is not an integer
    InvalidId,
    /// Route needs a couple but the caller's token carries none
    CoupleRequired,

    // Not found
    UserNotFound,
    CoupleNotFound,
    TodoNotFound,
    VendorNotFound,
    BudgetItemNotFound,
    WishlistItemNotFound,
    /// Generic not found (fallback)
    NotFound,

    // Conflicts
    /// Email already registered
    UniqueEmail,
    /// Caller already belongs to a couple
    AlreadyInCouple,
    /// Couple already has two members
    CoupleFull,
    /// Generic conflict (fallback for unmatched unique violations)
    Conflict,

    // System
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidId => "INVALID_ID",
            Self::CoupleRequired => "COUPLE_REQUIRED",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CoupleNotFound => "COUPLE_NOT_FOUND",
            Self::TodoNotFound => "TODO_NOT_FOUND",
            Self::VendorNotFound => "VENDOR_NOT_FOUND",
            Self::BudgetItemNotFound => "BUDGET_ITEM_NOT_FOUND",
            Self::WishlistItemNotFound => "WISHLIST_ITEM_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::AlreadyInCouple => "ALREADY_IN_COUPLE",
            Self::CoupleFull => "COUPLE_FULL",
            Self::Conflict => "CONFLICT",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
