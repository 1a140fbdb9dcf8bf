//! Authentication core: credential hashing, token issue/decode and the
//! per-request authorization gate.
//!
//! Nothing in here logs. Callers decide what is worth recording.

pub mod claims;
pub mod error;
pub mod gate;
pub mod jwt;
pub mod password;

pub use claims::ClaimSet;
pub use error::AuthError;
pub use jwt::{decode_token, issue_token, TOKEN_TTL_SECS};
pub use password::CredentialHasher;
