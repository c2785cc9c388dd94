//! Boat repository trait definition.

use boatyard_types::boat::{Boat, BoatChanges, BoatId, NewBoat};
use boatyard_types::error::RepositoryError;

/// Repository trait for boat persistence.
///
/// Implementations live in boatyard-infra (e.g., SqliteBoatRepository).
/// Ids are assigned by the implementation and must never be reused.
pub trait BoatRepository: Send + Sync {
    /// Store a new boat and return it with its assigned id.
    fn create(
        &self,
        boat: &NewBoat,
    ) -> impl std::future::Future<Output = Result<Boat, RepositoryError>> + Send;

    /// Get a boat by its id.
    fn get_by_id(
        &self,
        id: &BoatId,
    ) -> impl std::future::Future<Output = Result<Option<Boat>, RepositoryError>> + Send;

    /// List every boat in insertion order.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Boat>, RepositoryError>> + Send;

    /// Apply `changes` atomically. Returns `None` when no boat has that id.
    fn update(
        &self,
        id: &BoatId,
        changes: &BoatChanges,
    ) -> impl std::future::Future<Output = Result<Option<Boat>, RepositoryError>> + Send;

    /// Permanently delete a boat. Fails with `RepositoryError::NotFound` if absent.
    fn delete(
        &self,
        id: &BoatId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
