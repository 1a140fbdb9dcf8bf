use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Stored hash does not parse as a PHC string. Data-integrity fault.
    #[error("stored credential hash is malformed")]
    MalformedHash,
    #[error("credential hashing failed")]
    Hashing,
    /// Expired, tampered or structurally invalid token.
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("token could not be issued")]
    TokenIssue,
    /// Uniform "not authenticated" outcome of the gate.
    #[error("authentication required")]
    AuthenticationRequired,
}
