//! Test helpers for integration tests.
//!
//! Provides a stub user service with scripted behaviour and helpers that
//! start the real services on ephemeral ports.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, HeaderName, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use userboard::config::{BoardServiceConfig, DirectoryConfig, UserServiceConfig};
use userboard::{board, user, Database, HttpUserDirectory, WebServer};

/// Request timeout used by directory clients in tests.
pub const TEST_REQUEST_TIMEOUT_MS: u64 = 200;

/// How the stub user service answers.
#[derive(Clone)]
pub enum StubBehavior {
    /// Serve these users from `/users?ids=` and `/users/{id}`.
    Users(Vec<(i64, &'static str)>),
    /// Answer every request with this status and an empty JSON object.
    Status(StatusCode),
    /// Answer every request with 200 and a body that is not valid JSON.
    Malformed,
    /// Sleep before answering with an empty list.
    Slow(Duration),
}

/// A stub user service listening on an ephemeral port.
pub struct StubUserService {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubUserService {
    /// Start the stub in the background.
    pub async fn start(behavior: StubBehavior) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let router = Router::new().fallback(move |uri: Uri| {
            let behavior = behavior.clone();
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(describe(&uri));
                respond(&behavior, &uri).await
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, requests }
    }

    /// Base URL for a directory client.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, as `path?key=value` with the query decoded.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn describe(uri: &Uri) -> String {
    match uri.query() {
        Some(query) => {
            let decoded: Vec<String> = url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            format!("{}?{}", uri.path(), decoded.join("&"))
        }
        None => uri.path().to_string(),
    }
}

fn query_ids(uri: &Uri) -> Vec<i64> {
    let params: HashMap<String, String> = uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    params
        .get("ids")
        .map(|ids| ids.split(',').filter_map(|s| s.parse().ok()).collect())
        .unwrap_or_default()
}

type StubResponse = (StatusCode, [(HeaderName, &'static str); 1], String);

async fn respond(behavior: &StubBehavior, uri: &Uri) -> StubResponse {
    let json_header = [(CONTENT_TYPE, "application/json")];
    match behavior {
        StubBehavior::Status(status) => (*status, json_header, "{}".to_string()),
        StubBehavior::Malformed => (StatusCode::OK, json_header, "{\"userId\": ".to_string()),
        StubBehavior::Slow(delay) => {
            tokio::time::sleep(*delay).await;
            (StatusCode::OK, json_header, "[]".to_string())
        }
        StubBehavior::Users(users) => {
            let summary = |id: i64, name: &str| {
                json!({
                    "userId": id,
                    "email": format!("{}@example.com", name.to_lowercase()),
                    "name": name,
                })
            };
            let path = uri.path();
            if path == "/users" {
                let wanted = query_ids(uri);
                let found: Vec<Value> = users
                    .iter()
                    .filter(|(id, _)| wanted.contains(id))
                    .map(|(id, name)| summary(*id, name))
                    .collect();
                return (StatusCode::OK, json_header, Value::Array(found).to_string());
            }

            let single = path
                .strip_prefix("/users/")
                .and_then(|id| id.parse::<i64>().ok())
                .and_then(|id| users.iter().find(|(uid, _)| *uid == id));
            match single {
                Some((id, name)) => (StatusCode::OK, json_header, summary(*id, name).to_string()),
                None => (StatusCode::NOT_FOUND, json_header, "{}".to_string()),
            }
        }
    }
}

/// Directory configuration pointing at `base_url` with short test timeouts.
pub fn directory_config(base_url: &str) -> DirectoryConfig {
    DirectoryConfig {
        base_url: base_url.to_string(),
        connect_timeout_ms: TEST_REQUEST_TIMEOUT_MS,
        request_timeout_ms: TEST_REQUEST_TIMEOUT_MS,
        ..DirectoryConfig::default()
    }
}

/// Directory client pointing at `base_url`.
pub fn directory(base_url: &str) -> HttpUserDirectory {
    HttpUserDirectory::new(&directory_config(base_url)).unwrap()
}

/// A base URL on which nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Start the real user service on an ephemeral port.
pub async fn start_user_service() -> SocketAddr {
    let db = Database::open_in_memory(user::MIGRATIONS).await.unwrap();
    let config = UserServiceConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..UserServiceConfig::default()
    };
    WebServer::user_service(&config, db)
        .unwrap()
        .run_with_addr()
        .await
        .unwrap()
}

/// Start the real board service on an ephemeral port, resolving authors via `user_base_url`.
pub async fn start_board_service(user_base_url: &str) -> SocketAddr {
    let db = Database::open_in_memory(board::MIGRATIONS).await.unwrap();
    let config = BoardServiceConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..BoardServiceConfig::default()
    };
    WebServer::board_service(&config, db, directory(user_base_url))
        .unwrap()
        .run_with_addr()
        .await
        .unwrap()
}
