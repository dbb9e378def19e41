//! Integration test harness for KeepAnime.
//!
//! Drives the storefront router in-process with `tower::ServiceExt`, so
//! the tests exercise the real middleware stack (sessions included)
//! without binding a socket. Each [`TestApp`] gets its own document
//! store, seeded catalog, and temporary slot directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use keepanime_storefront::config::StorefrontConfig;
use keepanime_storefront::db::Database;
use keepanime_storefront::state::AppState;
use keepanime_storefront::{app, seed};

/// An in-process storefront with one session's cookie jar.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
    _data_dir: tempfile::TempDir,
}

impl TestApp {
    /// Build a storefront over a fresh store with the seeded catalog.
    #[must_use]
    pub fn spawn() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp data dir");
        let config = StorefrontConfig {
            host: [127, 0, 0, 1].into(),
            port: 0,
            base_url: "http://localhost".to_string(),
            data_dir: data_dir.path().to_path_buf(),
            seed_on_startup: true,
            sentry_dsn: None,
        };

        let db = Database::new();
        seed::seed(&db);

        Self {
            router: app(AppState::new(config, db)),
            cookie: None,
            _data_dir: data_dir,
        }
    }

    /// Forget the session cookie, starting a fresh session against the
    /// same server.
    pub fn reset_session(&mut self) {
        self.cookie = None;
    }

    /// `GET` a path.
    pub async fn get(&mut self, path: &str) -> (StatusCode, Value) {
        self.dispatch("GET", path, None).await
    }

    /// `POST` a JSON body.
    pub async fn post(&mut self, path: &str, body: Value) -> (StatusCode, Value) {
        self.dispatch("POST", path, Some(body)).await
    }

    /// `PATCH` a JSON body.
    pub async fn patch(&mut self, path: &str, body: Value) -> (StatusCode, Value) {
        self.dispatch("PATCH", path, Some(body)).await
    }

    /// `DELETE` a path.
    pub async fn delete(&mut self, path: &str) -> (StatusCode, Value) {
        self.dispatch("DELETE", path, None).await
    }

    /// Log in as the given email and return the user record.
    pub async fn login(&mut self, email: &str) -> Value {
        let (status, user) = self
            .post("/auth/login", serde_json::json!({ "email": email }))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {user}");
        user
    }

    async fn dispatch(
        &mut self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to dispatch request");

        // Carry the session cookie across requests
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let raw = set_cookie.to_str().expect("Invalid Set-Cookie header");
            if let Some(pair) = raw.split(';').next() {
                self.cookie = Some(pair.to_string());
            }
        }

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });
        (status, value)
    }
}
