//! Argon2id credential hashing.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`), so
//! the algorithm, cost parameters and salt travel with the hash and
//! verification needs nothing else.
//!
//! Both operations are CPU-bound; request handlers run them through
//! `actix_web::web::block`.

use std::sync::{Arc, OnceLock};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use super::error::AuthError;

const DUMMY_SECRET: &str = "no-such-account";

/// The only configuration is the Argon2 cost. `dummy` is a hash made with that
/// cost, built on first use and shared between clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialHasher {
    params: Params,
    dummy: Arc<OnceLock<String>>,
}

impl Default for CredentialHasher {
    /// Argon2id with the crate's recommended cost (19 MiB, 2 passes, 1 lane).
    fn default() -> Self {
        Self {
            params: Params::default(),
            dummy: Arc::default(),
        }
    }
}

impl CredentialHasher {
    /// Custom cost, e.g. a cheap one for tests. Memory is in KiB.
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, AuthError> {
        let params = Params::new(m_cost, t_cost, p_cost, None).map_err(|_| AuthError::Hashing)?;
        Ok(Self {
            params,
            dummy: Arc::default(),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Salted one-way hash of `secret`.
    pub fn hash(&self, secret: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::Hashing)
    }

    /// `Ok(false)` on mismatch; `Err` only when `hashed` is not a PHC string.
    pub fn verify(&self, secret: &str, hashed: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hashed).map_err(|_| AuthError::MalformedHash)?;

        match self.argon2().verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(_) => Err(AuthError::MalformedHash),
        }
    }

    /// Verify `secret` against a throwaway hash of the same cost, so an
    /// unknown account takes as long to reject as a wrong password.
    pub fn verify_unknown(&self, secret: &str) {
        let dummy = self
            .dummy
            .get_or_init(|| self.hash(DUMMY_SECRET).unwrap_or_default());
        let _ = self.verify(secret, dummy);
    }
}
