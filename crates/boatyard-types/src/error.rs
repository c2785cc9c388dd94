use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single violated field constraint, e.g. `name: Name is mandatory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors related to boat operations.
#[derive(Debug, Error)]
pub enum BoatError {
    #[error("{}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("boat not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors raised while authenticating a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing credentials")]
    MissingCredentials,

    #[error("malformed credentials: {0}")]
    MalformedCredentials(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("credential check failed: {0}")]
    Internal(String),
}

/// Errors from repository operations (used by trait definitions in boatyard-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("invalid principal '{username}': {reason}")]
    InvalidPrincipal { username: String, reason: String },
}
