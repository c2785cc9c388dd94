//! Stateless credential checking for HTTP Basic authentication.
//!
//! `AuthService` holds the configured principal set and verifies a
//! username/password pair against it on every request. Nothing is cached
//! between calls. The password hashing algorithm sits behind
//! [`CredentialHasher`]; the Argon2 adapter lives in boatyard-infra.

use std::collections::HashMap;

use boatyard_types::config::PrincipalConfig;
use boatyard_types::error::AuthError;

const DUMMY_PASSWORD: &str = "boatyard-dummy-password";

/// Abstraction over password hashing.
pub trait CredentialHasher: Send + Sync {
    /// Hash a password into a self-describing string (salt and parameters included).
    fn hash_password(&self, password: &str) -> Result<String, AuthError>;

    /// Hash `password` with the same algorithm and cost as `reference`, so
    /// that verifying against the result takes as long as against `reference`.
    fn hash_password_like(&self, password: &str, reference: &str) -> Result<String, AuthError> {
        let _ = reference;
        self.hash_password(password)
    }

    /// Check a password against a hash produced by `hash_password`.
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
}

/// Verifies credentials against a fixed principal set.
pub struct AuthService<H: CredentialHasher> {
    principals: HashMap<String, String>,
    hasher: H,
    /// Checked for unknown usernames so their response time matches known ones.
    dummy_hash: String,
}

impl<H: CredentialHasher> AuthService<H> {
    pub fn new(principals: Vec<PrincipalConfig>, hasher: H) -> Result<Self, AuthError> {
        let dummy_hash = match principals.first() {
            Some(first) => hasher.hash_password_like(DUMMY_PASSWORD, &first.password_hash)?,
            None => hasher.hash_password(DUMMY_PASSWORD)?,
        };
        let principals = principals
            .into_iter()
            .map(|p| (p.username, p.password_hash))
            .collect();

        Ok(Self {
            principals,
            hasher,
            dummy_hash,
        })
    }

    /// Number of configured principals.
    pub fn principal_count(&self) -> usize {
        self.principals.len()
    }

    /// Verify a username/password pair.
    ///
    /// This is CPU-bound (password hashing); async callers should run it on a
    /// blocking thread.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        match self.principals.get(username) {
            Some(hash) => {
                if self.hasher.verify_password(password, hash)? {
                    Ok(Principal {
                        username: username.to_string(),
                    })
                } else {
                    tracing::debug!(username, "password mismatch");
                    Err(AuthError::InvalidCredentials)
                }
            }
            None => {
                let _ = self.hasher.verify_password(password, &self.dummy_hash);
                tracing::debug!(username, "unknown username");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
