use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use formdesk::config::Config;
use formdesk::db::MemoryStore;

/// A running test server backed by its own in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Create a submission, return (body, status).
    pub async fn submit(&self, form_type: &str, data: Value) -> (Value, StatusCode) {
        self.post_json(
            "/api/submissions",
            &json!({ "formType": form_type, "data": data }),
        )
        .await
    }

    /// Create a submission that must succeed, return its id.
    pub async fn submit_ok(&self, form_type: &str, data: Value) -> String {
        let (body, status) = self.submit(form_type, data).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body["id"].as_str().unwrap().to_string()
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

    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
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

    /// POST a raw body with a JSON content type.
    pub async fn post_raw(&self, path: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// List submissions, optionally filtered, return (body, status).
    pub async fn list(&self, search: Option<&str>) -> (Value, StatusCode) {
        let mut req = self.client.get(self.url("/api/submissions"));
        if let Some(term) = search {
            req = req.query(&[("search", term)]);
        }
        let resp = req.send().await.expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Ids of the listing for `search`, in response order.
    pub async fn list_ids(&self, search: Option<&str>) -> Vec<String> {
        let (body, status) = self.list(search).await;
        assert_eq!(status, StatusCode::OK, "list failed: {body}");
        body.as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap().to_string())
            .collect()
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        log_level: "warn".to_string(),
        ..Config::default()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

/// Spawn the full router on a random local port.
pub async fn spawn_app_with(config: Config) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let (app, _state) = formdesk::build_app_with_repository(config, store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        store,
    }
}
