//! Configuration loader for Boatyard.
//!
//! Reads `config.toml` (by default from the platform data directory) and
//! deserializes it into [`AppConfig`]. A missing file means defaults; a file
//! that exists but cannot be parsed is an error, since silently dropping the
//! principal list would change who may call the API.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use boatyard_core::service::auth::CredentialHasher;
use boatyard_types::config::{AppConfig, PrincipalConfig};
use boatyard_types::error::{AuthError, ConfigError};

use crate::crypto::password::validate_password_hash;

/// Username of the development principal used when none are configured.
pub const DEV_USERNAME: &str = "admin";
const DEV_PASSWORD: &str = "hunter2";

/// Resolve the data directory: `{platform data dir}/boatyard`, or `./.boatyard`
/// when the platform has none.
pub fn resolve_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("boatyard"))
        .unwrap_or_else(|| PathBuf::from(".boatyard"))
}

/// Default config file location: `{data_dir}/config.toml`.
pub fn default_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Load and validate the configuration at `path`.
pub async fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                reason: err.to_string(),
            });
        }
    };

    let config = toml::from_str::<AppConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    validate_principals(&config.principals)?;
    Ok(config)
}

fn validate_principals(principals: &[PrincipalConfig]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for principal in principals {
        let invalid = |reason: String| ConfigError::InvalidPrincipal {
            username: principal.username.clone(),
            reason,
        };

        if principal.username.is_empty() {
            return Err(invalid("username cannot be empty".to_string()));
        }
        if principal.username.contains(':') {
            return Err(invalid("username cannot contain ':'".to_string()));
        }
        if !seen.insert(principal.username.as_str()) {
            return Err(invalid("duplicate username".to_string()));
        }
        validate_password_hash(&principal.password_hash).map_err(invalid)?;
    }
    Ok(())
}

/// The principals the server should accept.
///
/// Falls back to a single development principal (`admin` / `hunter2`) when
/// the configuration lists none.
pub fn effective_principals(
    config: &AppConfig,
    hasher: &impl CredentialHasher,
) -> Result<Vec<PrincipalConfig>, AuthError> {
    if !config.principals.is_empty() {
        return Ok(config.principals.clone());
    }

    tracing::warn!(
        "No principals configured, accepting development credentials '{DEV_USERNAME}' / '{DEV_PASSWORD}'"
    );
    Ok(vec![PrincipalConfig {
        username: DEV_USERNAME.to_string(),
        password_hash: hasher.hash_password(DEV_PASSWORD)?,
    }])
}
