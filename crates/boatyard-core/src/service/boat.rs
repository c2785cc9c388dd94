//! Boat management service.
//!
//! Validates requests and delegates persistence to a [`BoatRepository`].
//! Validation always runs before the store is touched, so an invalid request
//! never produces a partial write.

use boatyard_types::boat::{
    Boat, BoatChanges, BoatId, CreateBoatRequest, NewBoat, PatchBoatRequest, ReplaceBoatRequest,
};
use boatyard_types::error::{BoatError, FieldViolation, RepositoryError};

use crate::repository::boat::BoatRepository;

const NAME_MANDATORY: &str = "Name is mandatory";
const DESCRIPTION_MANDATORY: &str = "Description is mandatory";

/// Service implementing the Boat store operations.
pub struct BoatService<B: BoatRepository> {
    boat_repo: B,
}

impl<B: BoatRepository> BoatService<B> {
    pub fn new(boat_repo: B) -> Self {
        Self { boat_repo }
    }

    /// Create a boat. Both fields must be present and non-blank.
    pub async fn create_boat(&self, request: CreateBoatRequest) -> Result<Boat, BoatError> {
        let new_boat = validate_complete(request)?;

        let boat = self.boat_repo.create(&new_boat).await.map_err(storage_error)?;
        tracing::info!(boat_id = %boat.id, "boat created");
        Ok(boat)
    }

    /// Get a boat by id.
    pub async fn get_boat(&self, id: &BoatId) -> Result<Boat, BoatError> {
        self.boat_repo
            .get_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(BoatError::NotFound)
    }

    /// List all boats.
    pub async fn list_boats(&self) -> Result<Vec<Boat>, BoatError> {
        self.boat_repo.list().await.map_err(storage_error)
    }

    /// Replace both mutable fields of a boat (PUT semantics).
    pub async fn replace_boat(
        &self,
        id: &BoatId,
        request: ReplaceBoatRequest,
    ) -> Result<Boat, BoatError> {
        let NewBoat { name, description } = validate_complete(request)?;
        let changes = BoatChanges {
            name: Some(name),
            description: Some(description),
        };
        self.apply_changes(id, &changes).await
    }

    /// Merge the provided fields into a boat (PATCH semantics).
    pub async fn patch_boat(&self, id: &BoatId, request: PatchBoatRequest) -> Result<Boat, BoatError> {
        // Sent as `null` or blank: rejected. Not sent: left alone.
        let invalid = |field: &Option<Option<String>>| match field {
            Some(value) => value.as_deref().is_none_or(is_blank),
            None => false,
        };

        let mut violations = Vec::new();
        if invalid(&request.name) {
            violations.push(FieldViolation::new("name", NAME_MANDATORY));
        }
        if invalid(&request.description) {
            violations.push(FieldViolation::new("description", DESCRIPTION_MANDATORY));
        }
        if !violations.is_empty() {
            return Err(BoatError::Validation(violations));
        }

        let changes = BoatChanges {
            name: request.name.flatten(),
            description: request.description.flatten(),
        };
        self.apply_changes(id, &changes).await
    }

    async fn apply_changes(&self, id: &BoatId, changes: &BoatChanges) -> Result<Boat, BoatError> {
        let boat = self
            .boat_repo
            .update(id, changes)
            .await
            .map_err(storage_error)?
            .ok_or(BoatError::NotFound)?;
        tracing::info!(boat_id = %boat.id, "boat updated");
        Ok(boat)
    }

    /// Delete a boat. Deleting an id twice fails the second time.
    pub async fn delete_boat(&self, id: &BoatId) -> Result<(), BoatError> {
        self.boat_repo.delete(id).await.map_err(storage_error)?;
        tracing::info!(boat_id = %id, "boat deleted");
        Ok(())
    }
}

fn storage_error(e: RepositoryError) -> BoatError {
    match e {
        RepositoryError::NotFound => BoatError::NotFound,
        other => BoatError::Storage(other.to_string()),
    }
}

/// Empty, or only whitespace and ASCII control characters.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c <= ' ' || c.is_whitespace())
}

/// Check that both fields are present and non-blank, reporting every violation.
fn validate_complete(request: CreateBoatRequest) -> Result<NewBoat, BoatError> {
    let name = request.name.filter(|n| !is_blank(n));
    let description = request.description.filter(|d| !is_blank(d));

    match (name, description) {
        (Some(name), Some(description)) => Ok(NewBoat { name, description }),
        (name, description) => {
            let mut violations = Vec::new();
            if name.is_none() {
                violations.push(FieldViolation::new("name", NAME_MANDATORY));
            }
            if description.is_none() {
                violations.push(FieldViolation::new("description", DESCRIPTION_MANDATORY));
            }
            Err(BoatError::Validation(violations))
        }
    }
}
