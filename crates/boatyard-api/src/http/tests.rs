//! End-to-end tests driving the full router (auth layer included).

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use tower::ServiceExt;

use boatyard_core::service::auth::CredentialHasher;
use boatyard_infra::crypto::password::Argon2CredentialHasher;
use boatyard_infra::sqlite::pool::{default_database_url, DatabasePool};
use boatyard_types::config::{DatabaseConfig, PrincipalConfig};

use crate::http::router::build_router;
use crate::state::AppState;

struct TestApp {
    router: Router,
    _dir: tempfile::TempDir,
}

async fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let pool = DatabasePool::connect(&default_database_url(dir.path()), &DatabaseConfig::default())
        .await
        .unwrap();

    // Cheap parameters keep each authenticated request fast in tests.
    let hasher = Argon2CredentialHasher::with_params(64, 1, 1).unwrap();
    let principals = vec![PrincipalConfig {
        username: "admin".to_string(),
        password_hash: hasher.hash_password("hunter2").unwrap(),
    }];

    let state = AppState::new(pool, principals, hasher).unwrap();
    TestApp {
        router: build_router(state),
        _dir: dir,
    }
}

fn basic(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

impl TestApp {
    async fn send_raw(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, bytes.to_vec())
    }

    /// Authenticated request with an optional JSON body.
    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(AUTHORIZATION, basic("admin", "hunter2"));
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let (status, _, bytes) = self.send_raw(request).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(&self, name: &str, description: &str) -> Value {
        let (status, body) = self
            .call(
                Method::POST,
                "/boats",
                Some(json!({"name": name, "description": description})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }
}

fn error_message(body: &Value) -> &str {
    body["errors"][0]["message"].as_str().unwrap()
}

#[tokio::test]
async fn create_then_get_returns_identical_body() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/boats")
        .header(AUTHORIZATION, basic("admin", "hunter2"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Titanic","description":"Ocean liner"}"#))
        .unwrap();
    let (status, headers, bytes) = app.send_raw(request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[LOCATION], "/boats/1");
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        created,
        json!({"id": 1, "name": "Titanic", "description": "Ocean liner"})
    );

    let (status, fetched) = app.call(Method::GET, "/boats/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_returns_all_boats_in_order() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;
    app.create("Nautilus", "Submarine").await;

    let (status, body) = app.call(Method::GET, "/boats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Argo", "description": "Galley"},
            {"id": 2, "name": "Nautilus", "description": "Submarine"},
        ])
    );
}

#[tokio::test]
async fn create_with_blank_fields_is_rejected_and_not_persisted() {
    let app = test_app().await;

    for body in [
        json!({"name": "", "description": "Ocean liner"}),
        json!({"name": "Titanic", "description": "   "}),
        json!({"name": " ", "description": ""}),
        json!({}),
    ] {
        let (status, response) = app.call(Method::POST, "/boats", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["errors"][0]["code"], "VALIDATION_ERROR");
    }

    let (_, list) = app.call(Method::GET, "/boats", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn validation_message_names_the_constraint() {
    let app = test_app().await;
    let (status, body) = app
        .call(Method::POST, "/boats", Some(json!({"description": "Ocean liner"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "name: Name is mandatory");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/boats")
        .header(AUTHORIZATION, basic("admin", "hunter2"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _, _) = app.send_raw(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .call(Method::POST, "/boats", Some(json!({"name": 5, "description": "x"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_content_type_is_a_bad_request() {
    let app = test_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/boats")
        .header(AUTHORIZATION, basic("admin", "hunter2"))
        .body(Body::from(r#"{"name":"Titanic","description":"Ocean liner"}"#))
        .unwrap();
    let (status, _, _) = app.send_raw(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = test_app().await;
    let valid = json!({"name": "Ghost", "description": "Ship"});

    let (status, body) = app.call(Method::GET, "/boats/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"][0]["code"], "BOAT_NOT_FOUND");

    let (status, _) = app.call(Method::PUT, "/boats/42", Some(valid.clone())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.call(Method::PATCH, "/boats/42", Some(valid)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.call(Method::DELETE, "/boats/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.call(Method::GET, "/boats/not-a-number", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_replaces_fields_and_keeps_id() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;

    let (status, body) = app
        .call(
            Method::PUT,
            "/boats/1",
            Some(json!({"id": 99, "name": "Argo II", "description": "Trireme"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Argo II", "description": "Trireme"}));

    let (_, fetched) = app.call(Method::GET, "/boats/1", None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn put_with_missing_field_is_rejected() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;

    let (status, body) = app
        .call(Method::PUT, "/boats/1", Some(json!({"name": "Argo II"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "description: Description is mandatory");

    let (_, fetched) = app.call(Method::GET, "/boats/1", None).await;
    assert_eq!(fetched["name"], "Argo");
}

#[tokio::test]
async fn patch_updates_only_present_fields() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;

    let (status, body) = app
        .call(Method::PATCH, "/boats/1", Some(json!({"name": "Argo II"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Argo II", "description": "Galley"}));

    let (status, _) = app
        .call(Method::PATCH, "/boats/1", Some(json!({"description": ""})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_with_null_field_is_rejected() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;

    let (status, body) = app
        .call(Method::PATCH, "/boats/1", Some(json!({"name": null})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "name: Name is mandatory");

    let (_, fetched) = app.call(Method::GET, "/boats/1", None).await;
    assert_eq!(fetched["name"], "Argo");
}

#[tokio::test]
async fn control_characters_count_as_blank() {
    let app = test_app().await;
    let (status, _) = app
        .call(
            Method::POST,
            "/boats",
            Some(json!({"name": "\u{1}", "description": "Ocean liner"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_is_not_idempotent() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;

    let (status, body) = app.call(Method::DELETE, "/boats/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = app.call(Method::GET, "/boats/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.call(Method::DELETE, "/boats/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;
    app.call(Method::DELETE, "/boats/1", None).await;

    let created = app.create("Nautilus", "Submarine").await;
    assert_eq!(created["id"], 2);
}

#[tokio::test]
async fn requests_without_credentials_are_unauthorized() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;

    let cases = [
        (Method::GET, "/boats"),
        (Method::POST, "/boats"),
        (Method::GET, "/boats/1"),
        (Method::GET, "/boats/999"),
        (Method::PUT, "/boats/999"),
        (Method::PATCH, "/boats/1"),
        (Method::DELETE, "/boats/999"),
        (Method::GET, "/"),
        (Method::GET, "/profile"),
        (Method::GET, "/no/such/path"),
    ];

    for (method, uri) in cases {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = app.send_raw(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert!(!headers.contains_key("www-authenticate"));
    }

    // Nothing was deleted by the unauthenticated DELETE.
    let (status, _) = app.call(Method::GET, "/boats/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn wrong_credentials_are_unauthorized() {
    let app = test_app().await;

    for authorization in [
        basic("admin", "wrong"),
        basic("mallory", "hunter2"),
        "Bearer hunter2".to_string(),
        "Basic ???".to_string(),
    ] {
        let request = Request::builder()
            .uri("/boats")
            .header(AUTHORIZATION, authorization.as_str())
            .body(Body::empty())
            .unwrap();
        let (status, _, _) = app.send_raw(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{authorization}");
    }
}

#[tokio::test]
async fn unknown_path_is_not_found_when_authenticated() {
    let app = test_app().await;
    let (status, body) = app.call(Method::GET, "/no/such/path", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"][0]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unsupported_method_uses_error_envelope() {
    let app = test_app().await;
    app.create("Argo", "Galley").await;

    let (status, body) = app
        .call(Method::POST, "/boats/1", Some(json!({"name": "x", "description": "y"})))
        .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["errors"][0]["code"], "METHOD_NOT_ALLOWED");

    let (status, body) = app.call(Method::DELETE, "/boats", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["errors"][0]["code"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn discovery_endpoints() {
    let app = test_app().await;

    let (status, index) = app.call(Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(index["_links"]["boats"]["href"], "/boats");

    let (status, profile) = app.call(Method::GET, "/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["resources"][0]["name"], "boats");
    assert_eq!(
        profile["resources"][0]["fields"],
        json!(["id", "name", "description"])
    );
}
