//! HTTP request handlers for the REST API.

pub mod boat;
pub mod index;
