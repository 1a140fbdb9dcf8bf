use jsonwebtoken::Algorithm;

/// Token signing settings, loaded once at startup and never mutated.
///
/// No `Default`: the secret always comes from configuration.
#[derive(Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    /// Always HS256 today
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
