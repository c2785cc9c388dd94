//! Business logic and port trait definitions for Boatyard.
//!
//! This crate defines the "ports" (repository and hashing traits) that the
//! infrastructure layer implements. It depends only on `boatyard-types` --
//! never on `boatyard-infra` or any database/IO crate.

pub mod repository;
pub mod service;
