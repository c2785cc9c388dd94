//! Infrastructure layer for Boatyard.
//!
//! Contains implementations of the port traits defined in `boatyard-core`:
//! SQLite storage, Argon2 password hashing, and configuration file loading.

pub mod config;
pub mod crypto;
pub mod sqlite;
