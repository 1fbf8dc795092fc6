#![allow(dead_code)]

//! Test infrastructure for profile-server API tests

use profile_core::{IdentityRecord, UserId};
use profile_db::SqliteReferenceStore;
use profile_identity::{IdentityError, IdentityGateway, IdentityLookup};
use profile_server::AppState;
use profile_sync::{ConsumerStatus, Reconciler, ShutdownCoordinator};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    profile_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[derive(Debug, Clone, Copy)]
enum Answer {
    Found,
    Unavailable,
}

/// Identity service stand-in. Users not registered are reported as not found.
#[derive(Default)]
pub struct FakeIdentityGateway {
    users: HashMap<UserId, Answer>,
    lookups: Mutex<Vec<UserId>>,
}

impl FakeIdentityGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, id: UserId) -> Self {
        self.users.insert(id, Answer::Found);
        self
    }

    pub fn with_unavailable(mut self, id: UserId) -> Self {
        self.users.insert(id, Answer::Unavailable);
        self
    }

    pub fn lookups(&self) -> Vec<UserId> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityGateway for FakeIdentityGateway {
    async fn lookup_user(&self, id: UserId) -> IdentityLookup {
        self.lookups.lock().unwrap().push(id);

        match self.users.get(&id) {
            Some(Answer::Found) => IdentityLookup::Found(IdentityRecord {
                id,
                username: format!("user{}", id),
                email: Some(format!("user{}@test.local", id)),
            }),
            Some(Answer::Unavailable) => IdentityLookup::Unavailable(IdentityError::Status {
                status: 502,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => IdentityLookup::NotFound,
        }
    }
}

/// Create AppState for testing
pub async fn create_test_app_state(
    gateway: Arc<FakeIdentityGateway>,
    unavailable_as_not_found: bool,
) -> AppState {
    let pool = create_test_pool().await;
    let store = Arc::new(SqliteReferenceStore::new(pool.clone()));

    AppState {
        pool,
        reconciler: Reconciler::new(store),
        identity: gateway,
        consumer_status: ConsumerStatus::new(),
        shutdown: ShutdownCoordinator::new(),
        unavailable_as_not_found,
        metrics: None,
    }
}

pub async fn count_references(pool: &SqlitePool, user_id: UserId) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM auth_users WHERE id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count references")
}

/// Send one request and return the status with the decoded JSON body (Null when empty or not JSON).
pub async fn send(app: Router, request: Request<Body>) -> (axum::http::StatusCode, serde_json::Value) {
    let response: Response<Body> = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// JSON request with an optional `X-User-Id` header
pub fn json_request(
    method: &str,
    uri: &str,
    caller: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(caller) = caller {
        builder = builder.header("X-User-Id", caller);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn delete(uri: &str, caller: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);

    if let Some(caller) = caller {
        builder = builder.header("X-User-Id", caller);
    }

    builder.body(Body::empty()).unwrap()
}
