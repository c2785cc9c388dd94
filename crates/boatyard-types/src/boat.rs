use serde::{Deserialize, Deserializer, Serialize};

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a boat, assigned by the store on creation.
///
/// Serialized as a bare integer (`"id": 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoatId(pub i64);

impl fmt::Display for BoatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BoatId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A persisted boat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    pub id: BoatId,
    pub name: String,
    pub description: String,
}

/// A validated boat that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoat {
    pub name: String,
    pub description: String,
}

/// Validated field changes for an existing boat. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoatChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body of `POST /boats`.
///
/// Fields are optional at the serde level so a missing field is reported as a
/// validation failure naming the field rather than as a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBoatRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body of `PUT /boats/{id}`. Replaces every mutable field, so both are required.
pub type ReplaceBoatRequest = CreateBoatRequest;

/// Body of `PATCH /boats/{id}`.
///
/// The outer `Option` records whether the field was sent at all: an absent
/// field keeps its current value, while an explicit `null` is a value (and an
/// invalid one, since both fields are mandatory).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchBoatRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

/// Only called for keys that appear in the body, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
