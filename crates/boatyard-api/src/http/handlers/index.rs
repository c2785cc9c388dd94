//! Discovery endpoints: the resource index and resource metadata.
//!
//! Clients use `GET /profile` as a cheap way to check credentials before
//! loading data.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use crate::http::error::AppError;

#[derive(Debug, Serialize)]
pub struct Link {
    pub href: String,
}

/// GET / - Links to every exposed resource.
#[derive(Debug, Serialize)]
pub struct Index {
    #[serde(rename = "_links")]
    pub links: BTreeMap<&'static str, Link>,
}

/// Shape and allowed methods of one resource.
#[derive(Debug, Serialize)]
pub struct ResourceDescriptor {
    pub name: &'static str,
    pub href: &'static str,
    pub fields: &'static [&'static str],
    pub collection_methods: &'static [&'static str],
    pub item_methods: &'static [&'static str],
}

/// GET /profile body.
#[derive(Debug, Serialize)]
pub struct Profile {
    pub resources: Vec<ResourceDescriptor>,
}

pub async fn root() -> Json<Index> {
    let links = [("boats", "/boats"), ("profile", "/profile")]
        .into_iter()
        .map(|(rel, href)| (rel, Link { href: href.to_string() }))
        .collect();
    Json(Index { links })
}

pub async fn profile() -> Json<Profile> {
    Json(Profile {
        resources: vec![ResourceDescriptor {
            name: "boats",
            href: "/boats",
            fields: &["id", "name", "description"],
            collection_methods: &["GET", "POST"],
            item_methods: &["GET", "PUT", "PATCH", "DELETE"],
        }],
    })
}

/// Fallback for unknown paths (only reached after authentication).
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
