//! Axum router configuration with middleware.
//!
//! Layer order (outermost first): tracing, Basic authentication, routes.
//! The authentication layer also wraps the fallback, so unknown paths are
//! only revealed as 404 to authenticated callers.

use axum::extract::Request;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::http::{auth, handlers};
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::root))
        .route("/profile", get(handlers::index::profile))
        .route(
            "/boats",
            get(handlers::boat::list_boats).post(handlers::boat::create_boat),
        )
        .route(
            "/boats/{id}",
            get(handlers::boat::get_boat)
                .put(handlers::boat::replace_boat)
                .patch(handlers::boat::patch_boat)
                .delete(handlers::boat::delete_boat),
        )
        .method_not_allowed_fallback(handlers::index::method_not_allowed)
        .fallback(handlers::index::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

/// Request span with an empty `principal` field, filled in by the auth layer.
fn request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        principal = tracing::field::Empty,
    )
}
