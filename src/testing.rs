//! In-process stand-in for the Ollama generate endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Clone)]
enum Reply {
    Fixed(StatusCode, Value),
    Echo,
    Stall(Duration),
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    last: Arc<Mutex<Option<Value>>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    last: Arc<Mutex<Option<Value>>>,
    task: JoinHandle<()>,
}

impl MockBackend {
    pub async fn replying(status: u16, body: Value) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status");
        Self::start(Reply::Fixed(status, body)).await
    }

    /// Answers `echo: <prompt>`; the prompt "first" is answered last.
    pub async fn echoing() -> Self {
        Self::start(Reply::Echo).await
    }

    /// Holds every request for `delay` before answering.
    pub async fn stalling(delay: Duration) -> Self {
        Self::start(Reply::Stall(delay)).await
    }

    async fn start(reply: Reply) -> Self {
        let last = Arc::new(Mutex::new(None));
        let state = MockState {
            reply,
            last: Arc::clone(&last),
        };
        let app = Router::new()
            .route("/api/generate", post(generate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });

        Self { addr, last, task }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn last_request(&self) -> Option<Value> {
        self.last.lock().expect("lock poisoned").clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn generate(State(state): State<MockState>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    *state.last.lock().expect("lock poisoned") = Some(body.clone());

    match state.reply {
        Reply::Fixed(status, value) => (status, Json(value)),
        Reply::Echo => {
            let prompt = body["prompt"].as_str().unwrap_or_default().to_string();
            if prompt == "first" {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            (StatusCode::OK, Json(json!({ "response": format!("echo: {prompt}") })))
        }
        Reply::Stall(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, Json(json!({ "response": "too late" })))
        }
    }
}

/// A URL on a port nothing is listening on.
pub async fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}
