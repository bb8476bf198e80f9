//! Argon2 password hashing.
//!
//! Hashes are stored in PHC string format, so verification reads its parameters from the
//! stored hash and keeps working after the cost settings change.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use crate::errors::ServiceError;

/// Argon2id cost settings used for new hashes.
#[derive(Debug, Clone, Copy)]
pub struct AuthConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl AuthConfig {
    /// Cheap settings for tests.
    pub fn fast() -> Self {
        Self { memory_kib: 1024, iterations: 1, parallelism: 1 }
    }

    fn hasher(&self) -> Result<Argon2<'static>, ServiceError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| ServiceError::Hash(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

pub fn hash_password(cfg: &AuthConfig, raw: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = cfg
        .hasher()?
        .hash_password(raw.as_bytes(), &salt)
        .map_err(|e| ServiceError::Hash(e.to_string()))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(raw: &str, stored: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(stored).map_err(|e| ServiceError::Hash(e.to_string()))?;
    Ok(Argon2::default().verify_password(raw.as_bytes(), &parsed).is_ok())
}
