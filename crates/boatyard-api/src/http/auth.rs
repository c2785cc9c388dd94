//! HTTP Basic authentication middleware.
//!
//! Applied once to the whole router, so it runs before route resolution and
//! before any resource lookup: an unauthenticated request gets 401 whether or
//! not the target exists. No session or cookie is issued, every request
//! carries its own credentials. No `WWW-Authenticate` challenge is sent, which
//! keeps browsers from showing their native login dialog.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use boatyard_types::error::AuthError;

use crate::http::error::AppError;
use crate::state::AppState;

/// Username and password decoded from an `Authorization: Basic` header.
#[derive(Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Decode `Authorization: Basic base64(username:password)`.
pub fn parse_basic_credentials(headers: &HeaderMap) -> Result<BasicCredentials, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::MalformedCredentials("invalid header encoding".to_string()))?;

    let (scheme, encoded) = value
        .split_once(' ')
        .ok_or_else(|| AuthError::MalformedCredentials("expected 'Basic <credentials>'".to_string()))?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::MalformedCredentials(format!(
            "unsupported scheme '{scheme}'"
        )));
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedCredentials("invalid base64".to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| AuthError::MalformedCredentials("credentials are not UTF-8".to_string()))?;

    // The password may itself contain ':'; only the first one separates.
    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| AuthError::MalformedCredentials("missing ':' separator".to_string()))?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Reject the request with 401 unless it carries valid Basic credentials.
///
/// On success the [`Principal`](boatyard_core::service::auth::Principal) is
/// stored in the request extensions for handlers to pick up.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = parse_basic_credentials(request.headers()).inspect_err(|e| {
        tracing::debug!(error = %e, "rejecting request without usable credentials");
    })?;

    let auth_service = state.auth_service.clone();
    let principal = tokio::task::spawn_blocking(move || {
        auth_service.authenticate(&credentials.username, &credentials.password)
    })
    .await
    .map_err(|e| AppError::Internal(format!("credential check aborted: {e}")))??;

    tracing::Span::current().record("principal", principal.username.as_str());
    tracing::debug!(principal = %principal.username, "request authenticated");
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}
