//! HTTP/REST API layer for Boatyard.
//!
//! Axum-based REST API exposing the boat resource, guarded by stateless
//! HTTP Basic authentication.

pub mod auth;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;

#[cfg(test)]
mod tests;
