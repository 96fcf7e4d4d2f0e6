#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use http_body_util::BodyExt;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use rollcall::router::init_router;
use rollcall::state::AppState;
use rollcall_auth::MemoryIdentity;
use rollcall_db::MemoryStore;
use rollcall_roster::{MemoryRoster, RosterRecord};

pub const DEFAULT_VIEW: &str = "Grid view";
pub const PASSWORD: &str = "hunter22";

/// The router backed by in-memory providers, with handles to inspect them.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub identity: Arc<MemoryIdentity>,
    pub roster: Arc<MemoryRoster>,
}

pub struct TestAccount {
    pub uid: String,
    pub email: String,
    pub name: String,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(MemoryIdentity::new());
        let roster = Arc::new(MemoryRoster::new());

        let state = AppState::new(store.clone(), identity.clone(), roster.clone());

        Self {
            router: init_router(state),
            store,
            identity,
            roster,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&value).unwrap())
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
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, value)
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body), None).await
    }

    pub async fn get(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(body), None).await
    }

    pub async fn delete(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(body), None).await
    }

    /// Registers a fresh account through the API.
    pub async fn register(&self) -> TestAccount {
        let email = unique_email();
        let name: String = Name().fake();

        let (status, body) = self
            .post(
                "/api/auth/register",
                json!({ "email": email, "name": name, "password": PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");

        TestAccount {
            uid: body["data"]["token"].as_str().unwrap().to_string(),
            email,
            name,
        }
    }

    pub async fn create_semester(&self, semester_id: &str) {
        let (status, body) = self
            .post(
                "/api/add/semester",
                json!({
                    "semester_id": semester_id,
                    "semester_name": format!("Semester {semester_id}"),
                    "start_date": "2024-09-01",
                    "end_date": "2024-12-20"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create semester failed: {body}");
    }

    pub async fn add_roster_record(&self, id: &str, fields: Value) {
        self.roster
            .insert(DEFAULT_VIEW, RosterRecord::new(id, object(fields)))
            .await;
    }
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// Lower-case unique email; the identity provider normalizes case.
pub fn unique_email() -> String {
    let email: String = SafeEmail().fake();
    format!("{}.{}", uuid::Uuid::new_v4().simple(), email).to_lowercase()
}
