//! In-process stand-in for the question-generation service.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, Response, StatusCode, Uri};
use axum::Router;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// One request as the service saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// Canned reply. The default is the service's root greeting.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Duration,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json(r#"{"message": "Resume Bandit API"}"#)
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// FastAPI-style error body.
    pub fn error(status: u16, detail: &str) -> Self {
        Self {
            status,
            ..Self::json(&serde_json::json!({ "detail": detail }).to_string())
        }
    }

    /// A 200 whose body is not JSON.
    pub fn text(body: &str) -> Self {
        Self {
            content_type: "text/plain",
            ..Self::json(body)
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Clone, Default)]
struct Shared {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Replies are served in the order they were enqueued; with the queue empty
/// every request gets `MockResponse::default()`.
pub struct MockBackend {
    pub addr: SocketAddr,
    shared: Shared,
    shutdown: watch::Sender<bool>,
}

impl MockBackend {
    /// Bind an ephemeral port and serve on the current tokio runtime.
    pub async fn start() -> Self {
        let shared = Shared::default();
        let (shutdown, mut stop) = watch::channel(false);

        let router = Router::new().fallback(reply).with_state(shared.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock service");
        let addr = listener.local_addr().expect("mock service address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = stop.changed().await;
                })
                .await;
        });

        Self {
            addr,
            shared,
            shutdown,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn enqueue(&self, response: MockResponse) {
        self.shared.replies.lock().push_back(response);
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.shared.requests.lock().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<CapturedRequest> {
        self.requests()
            .into_iter()
            .filter(|req| req.path == path)
            .collect()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn reply(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    request: Request<Body>,
) -> Response<Body> {
    let body = to_bytes(request.into_body(), 1024 * 1024)
        .await
        .map(|bytes| bytes.to_vec())
        .unwrap_or_default();

    shared.requests.lock().push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect(),
        body,
    });

    let canned = shared.replies.lock().pop_front().unwrap_or_default();
    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(canned.status).expect("valid status"))
        .header("content-type", canned.content_type)
        .body(Body::from(canned.body))
        .expect("valid response")
}
