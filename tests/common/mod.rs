use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use statusboard::config::Config;
use statusboard::db::{MemStorage, Storage};
use statusboard::generation::{GenerationError, TextGenerator};
use statusboard::state::AppState;

/// A running test server backed by its own in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemStorage>,
    pub client: Client,
}

/// Stand-in for the external text generator.
pub enum FakeGenerator {
    /// Returns `prefix` followed by the input, recording every call.
    Echo {
        prefix: String,
        calls: Mutex<Vec<(String, String)>>,
    },
    /// Always returns the given text.
    Fixed(String),
    /// Always errors.
    Failing,
}

impl FakeGenerator {
    pub fn echo(prefix: &str) -> Arc<Self> {
        Arc::new(FakeGenerator::Echo {
            prefix: prefix.to_string(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn fixed(text: &str) -> Arc<Self> {
        Arc::new(FakeGenerator::Fixed(text.to_string()))
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(FakeGenerator::Failing)
    }

    /// (system_prompt, input) pairs seen so far.
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<(String, String)> {
        match self {
            FakeGenerator::Echo { calls, .. } => calls.lock().unwrap().clone(),
            _ => Vec::new(),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, system_prompt: &str, input: &str) -> Result<String, GenerationError> {
        match self {
            FakeGenerator::Echo { prefix, calls } => {
                calls
                    .lock()
                    .unwrap()
                    .push((system_prompt.to_string(), input.to_string()));
                Ok(format!("{prefix}{input}"))
            }
            FakeGenerator::Fixed(text) => Ok(text.clone()),
            FakeGenerator::Failing => Err(GenerationError::Upstream {
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn patch(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("patch request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create a project, return the project JSON.
    pub async fn create_project(&self, title: &str) -> Value {
        let (body, status) = self.post("/api/projects", &project_body(title)).await;
        assert_eq!(status, StatusCode::CREATED, "create project failed: {body}");
        body
    }

    /// Post a status update, return the update JSON.
    pub async fn create_status(&self, project_id: &str, content: &str) -> Value {
        let (body, status) = self
            .post(
                &format!("/api/projects/{project_id}/statuses"),
                &json!({ "content": content, "commenter": "Tester" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create status failed: {body}");
        body
    }
}

/// A complete, valid project body.
pub fn project_body(title: &str) -> Value {
    json!({
        "title": title,
        "projectType": "Backend",
        "solutionArchitect": "Priya Raman",
        "projectLead": "Marcus Lee",
        "teamMembers": "Ana Souza, Tom Becker",
        "stakeholders": "Finance Ops",
        "wikiLink": "https://wiki.example.com/payments",
        "usefulLinks": "https://docs.example.com/payments",
        "modifiedDate": "2026-10-01"
    })
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        max_body_size: 1_048_576,
        static_dir: "static".to_string(),
        cors_origins: vec![],
        seed: false,
        newsletter_rate_limit: 0,
        gemini: None,
    }
}

/// Spawn a test app with an empty store and the given generator.
pub async fn spawn_app(generator: Option<Arc<dyn TextGenerator>>) -> TestApp {
    spawn_app_with(test_config(), generator).await
}

pub async fn spawn_app_with(config: Config, generator: Option<Arc<dyn TextGenerator>>) -> TestApp {
    let store = Arc::new(MemStorage::new());
    let shared: Arc<dyn Storage> = store.clone();
    let state = Arc::new(AppState::new(config, shared, generator));
    let app = statusboard::build_app(state);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    TestApp {
        addr,
        store,
        client: Client::new(),
    }
}
