//! Shared domain types for Boatyard.
//!
//! This crate contains the Boat resource model, the request shapes accepted by
//! the API, the configuration file model, and the error enums shared by every
//! layer.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod boat;
pub mod config;
pub mod error;
