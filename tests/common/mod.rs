#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use quiz_api::{
    AppState, build_router,
    config::{Config, DatabaseConfig, ServerConfig},
    infrastructure::db::Database,
    services::{PlainTextCredentials, RandomTokens, TokenGenerator},
};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
}

pub struct SignedUp {
    pub id: String,
    pub code: String,
}

/// Always hands out the same code and reverses instead of shuffling.
pub struct FixedTokens(pub &'static str);

impl TokenGenerator for FixedTokens {
    fn access_code(&self) -> String {
        self.0.to_string()
    }

    fn shuffle(&self, value: &str) -> String {
        value.chars().rev().collect()
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 5000,
            cors_allowed_origins: vec![],
            max_concurrent_requests: 16,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
        },
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(RandomTokens)).await
}

pub async fn spawn_app_with(tokens: Arc<dyn TokenGenerator>) -> TestApp {
    let config = test_config();

    let db = Arc::new(Database::init_db(&config.database).await.unwrap());
    db.run_migrations().await.unwrap();

    let state = AppState {
        config: Arc::new(config),
        db: db.clone(),
        tokens,
        credentials: Arc::new(PlainTextCredentials),
    };

    TestApp {
        router: build_router(state),
        db,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
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
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn signup(&self, username: &str, password: &str, age: i32) -> SignedUp {
        let (status, body) = self
            .post(
                "/signup",
                json!({ "username": username, "password": password, "age": age }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");

        SignedUp {
            id: body["id"].as_str().unwrap().to_string(),
            code: body["code"].as_str().unwrap().to_string(),
        }
    }

    pub async fn add_pet(&self, owner_id: &str, name: &str, kind: &str) -> String {
        let (status, body) = self
            .post(
                "/pets/new",
                json!({ "ownerId": owner_id, "name": name, "type": kind }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "add pet failed: {body}");

        body["petId"].as_str().unwrap().to_string()
    }
}

pub fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}
