//! JSON body extractor whose rejections are validation failures.
//!
//! `axum::Json` rejects bad bodies with 415/422/400 and a plain-text body.
//! Wrapping it turns every malformed body into a 400 in the API's error format.

use axum::extract::FromRequest;

use crate::http::error::AppError;

/// Like `axum::Json`, but rejects with [`AppError::Validation`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
