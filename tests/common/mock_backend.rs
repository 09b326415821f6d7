//! Local stand-in for the users REST endpoint.

#![allow(dead_code)]

use axum::extract::{OriginalUri, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the backend saw for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
}

/// One scripted reply.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl MockResponse {
    /// 200 with `body` as JSON.
    pub fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// `status` with a small JSON error document.
    pub fn error(status: u16) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: format!(r#"{{"status": {}}}"#, status),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Clone, Default)]
struct Script {
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
    seen: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Answers every path with the next scripted reply, or `[]` once the
/// script runs out. The server task is aborted on drop.
pub struct MockBackend {
    addr: SocketAddr,
    script: Script,
    server: JoinHandle<()>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let script = Script::default();
        let app = Router::new()
            .fallback(reply)
            .with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock users backend");
        let addr = listener.local_addr().expect("mock backend address");
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            script,
            server,
        }
    }

    pub async fn enqueue(&self, response: MockResponse) {
        self.script.replies.lock().push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.seen.lock().clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn reply(State(script): State<Script>, method: Method, OriginalUri(uri): OriginalUri) -> Response {
    script.seen.lock().push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
    });

    let next = script.replies.lock().pop_front();
    let next = next.unwrap_or_else(|| MockResponse::json("[]"));
    if !next.delay.is_zero() {
        tokio::time::sleep(next.delay).await;
    }

    (
        next.status,
        [(header::CONTENT_TYPE, "application/json")],
        next.body,
    )
        .into_response()
}
