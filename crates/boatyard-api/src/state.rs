//! Application state wiring all services together.
//!
//! Services are generic over repository/hasher traits, but AppState pins them
//! to the concrete infra implementations.

use std::path::Path;
use std::sync::Arc;

use boatyard_core::service::auth::AuthService;
use boatyard_core::service::boat::BoatService;
use boatyard_infra::config::effective_principals;
use boatyard_infra::crypto::password::Argon2CredentialHasher;
use boatyard_infra::sqlite::boat::SqliteBoatRepository;
use boatyard_infra::sqlite::pool::{default_database_url, DatabasePool};
use boatyard_types::config::{AppConfig, PrincipalConfig};
use boatyard_types::error::AuthError;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteBoatService = BoatService<SqliteBoatRepository>;

pub type ConcreteAuthService = AuthService<Argon2CredentialHasher>;

/// Shared application state handed to every handler and to the auth middleware.
#[derive(Clone)]
pub struct AppState {
    pub boat_service: Arc<ConcreteBoatService>,
    pub auth_service: Arc<ConcreteAuthService>,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init(config: &AppConfig, data_dir: &Path) -> anyhow::Result<Self> {
        let db_url = match &config.database.url {
            Some(url) => url.clone(),
            None => {
                tokio::fs::create_dir_all(data_dir).await?;
                default_database_url(data_dir)
            }
        };
        let db_pool = DatabasePool::connect(&db_url, &config.database).await?;

        let hasher = Argon2CredentialHasher::new();
        let principals = effective_principals(config, &hasher)?;

        let state = Self::new(db_pool, principals, hasher)?;
        tracing::info!(
            principals = state.auth_service.principal_count(),
            "application state ready"
        );
        Ok(state)
    }

    /// Wire services from already-built infrastructure.
    pub fn new(
        db_pool: DatabasePool,
        principals: Vec<PrincipalConfig>,
        hasher: Argon2CredentialHasher,
    ) -> Result<Self, AuthError> {
        let boat_service = BoatService::new(SqliteBoatRepository::new(db_pool));
        let auth_service = AuthService::new(principals, hasher)?;

        Ok(Self {
            boat_service: Arc::new(boat_service),
            auth_service: Arc::new(auth_service),
        })
    }
}
