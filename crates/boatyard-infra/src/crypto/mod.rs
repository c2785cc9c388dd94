//! Cryptographic operations for Boatyard.
//!
//! - `password`: Argon2id password hashing for HTTP Basic principals

pub mod password;
