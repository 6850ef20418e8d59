//! Shared helpers: spawn the application on an ephemeral port backed by a
//! private in-memory database.

#![allow(clippy::panic, dead_code)]

use std::time::Duration;

use serde_json::Value;

use noesis_api::api;
use noesis_api::app_state::AppState;
use noesis_api::persistence::sqlite::SqliteStore;
use noesis_api::service::AccountService;

/// A running server and an HTTP client pointed at it.
#[derive(Debug)]
pub struct TestApp {
    /// Base URL, e.g. `http://127.0.0.1:41234`.
    pub base_url: String,
    /// Shared client.
    pub client: reqwest::Client,
}

impl TestApp {
    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`, returning status and JSON body.
    pub async fn get(&self, path: &str) -> (u16, Value) {
        let Ok(resp) = self.client.get(self.url(path)).send().await else {
            panic!("GET {path} failed");
        };
        decode(resp).await
    }

    /// `DELETE path`, returning status and JSON body.
    pub async fn delete(&self, path: &str) -> (u16, Value) {
        let Ok(resp) = self.client.delete(self.url(path)).send().await else {
            panic!("DELETE {path} failed");
        };
        decode(resp).await
    }

    /// `POST path` with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> (u16, Value) {
        let Ok(resp) = self.client.post(self.url(path)).json(body).send().await else {
            panic!("POST {path} failed");
        };
        decode(resp).await
    }

    /// `PUT path` with a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> (u16, Value) {
        let Ok(resp) = self.client.put(self.url(path)).json(body).send().await else {
            panic!("PUT {path} failed");
        };
        decode(resp).await
    }

    /// Registers `email` with password `pw` and asserts success.
    pub async fn register(&self, email: &str) {
        let (status, _) = self
            .post(
                "/usuarios/registro",
                &serde_json::json!({ "email": email, "password": "pw" }),
            )
            .await;
        assert_eq!(status, 200, "registering {email}");
    }
}

async fn decode(resp: reqwest::Response) -> (u16, Value) {
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

/// Starts the full application (all layers) on `127.0.0.1:0`.
pub async fn spawn_app() -> TestApp {
    let Ok(store) = SqliteStore::in_memory().await else {
        panic!("in-memory store");
    };
    let state = AppState::new(AccountService::new(store));
    let app = api::build_app(state, Duration::from_secs(10));

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    TestApp {
        base_url: format!("http://{addr}"),
        client: reqwest::Client::new(),
    }
}
