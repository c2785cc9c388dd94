//! Argon2id password hashing for configured principals.
//!
//! Implements the `CredentialHasher` trait from `boatyard-core` using the
//! `argon2` crate (RustCrypto ecosystem). Hashes are PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`), so parameters and salt
//! travel with the hash and can be pasted straight into `config.toml`.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use boatyard_core::service::auth::CredentialHasher;
use boatyard_types::error::AuthError;

/// Argon2id implementation of `CredentialHasher` with the crate's default parameters.
#[derive(Default)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with explicit Argon2id cost parameters.
    ///
    /// - `m_cost`: memory in KiB
    /// - `t_cost`: iterations
    /// - `p_cost`: parallelism
    ///
    /// Only affects newly produced hashes; verification always uses the
    /// parameters embedded in the stored hash.
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, AuthError> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| AuthError::Internal(format!("invalid argon2 params: {e}")))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

/// Check that `hash` is an Argon2 PHC string this hasher can verify.
///
/// Any PHC string parses, so the algorithm and cost parameters are checked
/// too: a `$pbkdf2-sha256$...` hash would otherwise fail on every login.
pub fn validate_password_hash(hash: &str) -> Result<(), String> {
    let parsed = PasswordHash::new(hash).map_err(|e| e.to_string())?;
    argon2_for(&parsed).map(|_| ())
}

/// An `Argon2` instance configured exactly as `parsed` was produced.
fn argon2_for(parsed: &PasswordHash<'_>) -> Result<Argon2<'static>, String> {
    let algorithm = Algorithm::try_from(parsed.algorithm)
        .map_err(|_| format!("unsupported algorithm '{}', expected argon2", parsed.algorithm))?;
    let version = match parsed.version {
        Some(v) => Version::try_from(v).map_err(|e| format!("unsupported argon2 version: {e}"))?,
        None => Version::default(),
    };
    let params = Params::try_from(parsed).map_err(|e| format!("invalid argon2 params: {e}"))?;
    Ok(Argon2::new(algorithm, version, params))
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    fn hash_password_like(&self, password: &str, reference: &str) -> Result<String, AuthError> {
        let parsed =
            PasswordHash::new(reference).map_err(|e| AuthError::Internal(e.to_string()))?;
        let argon2 = argon2_for(&parsed).map_err(AuthError::Internal)?;
        let salt = SaltString::generate(&mut OsRng);
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Internal(e.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Internal(e.to_string())),
        }
    }
}
