//! Configuration types for Boatyard.
//!
//! `AppConfig` mirrors the `config.toml` file: bind address, database URL and
//! the principals allowed to call the API.

use serde::{Deserialize, Serialize};

/// Top-level configuration. Every section has defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Users allowed to authenticate with HTTP Basic.
    #[serde(default)]
    pub principals: Vec<PrincipalConfig>,
}

/// Bind address of the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database location and connection pool sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `None` means `{data_dir}/boatyard.db`.
    #[serde(default)]
    pub url: Option<String>,

    /// Read-only connections kept for `GET` traffic. Writes always share one.
    #[serde(default = "default_max_readers")]
    pub max_readers: u32,

    /// How long a statement waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

fn default_max_readers() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_readers: default_max_readers(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

/// A configured user: username plus an Argon2 PHC-format password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalConfig {
    pub username: String,
    pub password_hash: String,
}
