#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use usergate::router::init_router;
use usergate::state::AppState;
use usergate_auth::{ROLE_ADMIN, ROLE_USER, RoleStore};
use usergate_config::{CorsConfig, JwtConfig};
use usergate_core::StoreError;
use usergate_db::{InMemoryStore, UserStore};
use usergate_models::{NewUser, User};

pub const SECRET: &str = "integration-test-secret-key-at-least-32-chars";
pub const PASSWORD: &str = "test";

pub const USER_ID: i64 = 1;
pub const OTHER_USER_ID: i64 = 99;
pub const ADMIN_ID: i64 = 1000;
/// No record exists under this id.
pub const MISSING_ID: i64 = 100;

/// Delegates to an [`InMemoryStore`] and counts `delete` calls.
pub struct CountingStore {
    inner: Arc<InMemoryStore>,
    deletes: AtomicUsize,
}

impl CountingStore {
    pub fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for CountingStore {
    async fn find(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.inner.find(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.inner.find_by_email(email).await
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        self.inner.create(user).await
    }

    async fn save(&self, user: &User) -> Result<Option<User>, StoreError> {
        self.inner.save(user).await
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
    pub users: Arc<CountingStore>,
}

async fn seed_user(store: &InMemoryStore, id: i64, name: &str, roles: &[&str]) {
    store
        .insert(User {
            id,
            name: name.to_string(),
            email: format!("{}@test.com", name),
            password_hash: bcrypt::hash(PASSWORD, 4).unwrap(),
            deleted: false,
        })
        .await;
    for role in roles {
        store.assign_role(id, role).await.unwrap();
    }
}

/// App over an in-memory store seeded with users 1 and 99 (`USER`) and
/// 1000 (`USER`, `ADMIN`). Emails are `<name>@test.com`, passwords `test`.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(JwtConfig::new(SECRET)).await
}

pub async fn setup_test_app_with(jwt_config: JwtConfig) -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    seed_user(&store, USER_ID, "jinny", &[ROLE_USER]).await;
    seed_user(&store, OTHER_USER_ID, "other", &[ROLE_USER]).await;
    seed_user(&store, ADMIN_ID, "admin", &[ROLE_USER, ROLE_ADMIN]).await;

    let users = Arc::new(CountingStore {
        inner: store.clone(),
        deletes: AtomicUsize::new(0),
    });

    let state = AppState::new(
        users.clone(),
        store.clone(),
        &jwt_config,
        CorsConfig::default(),
    );

    TestApp {
        router: init_router(state.clone()),
        state,
        store,
        users,
    }
}

impl TestApp {
    pub fn token(&self, user_id: i64) -> String {
        self.state.tokens.issue(user_id).unwrap()
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        authorization: Option<String>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(authorization) = authorization {
            builder = builder.header("authorization", authorization);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_string(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Request carrying a bearer token for `user_id`.
    pub async fn request_as(
        &self,
        user_id: i64,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let authorization = format!("Bearer {}", self.token(user_id));
        self.request(method, uri, Some(authorization), body).await
    }
}
