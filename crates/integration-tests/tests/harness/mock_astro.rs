//! Mock astronauts feed for integration tests
//!
//! Serves a canned payload at `/astros.json`, with switches for failing or
//! malformed responses

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock astronauts feed returning predictable responses
pub struct MockAstro {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockAstroState>,
}

struct MockAstroState {
    request_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// When set, /astros.json returns this raw body instead of the feed
    malformed_body: Option<String>,
}

impl MockAstro {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0, None).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n, None).await
    }

    /// Start a mock server that returns a raw non-JSON body
    pub async fn start_with_body(body: &str) -> anyhow::Result<Self> {
        Self::start_inner(0, Some(body.to_owned())).await
    }

    async fn start_inner(fail_count: u32, malformed_body: Option<String>) -> anyhow::Result<Self> {
        let state = Arc::new(MockAstroState {
            request_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            malformed_body,
        });

        let app = Router::new()
            .route("/astros.json", routing::get(handle_astros))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            state,
        })
    }

    /// Base URL for configuring the mock as the feed
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of feed requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockAstro {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_astros(State(state): State<Arc<MockAstroState>>) -> axum::response::Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    // If fail_count > 0, decrement and return 500
    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock feed intentional failure")
            .into_response();
    }

    if let Some(body) = &state.malformed_body {
        return (
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response();
    }

    Json(serde_json::json!({
        "people": [
            {"name": "Oleg Kononenko", "craft": "ISS"},
            {"name": "Nikolai Chub", "craft": "ISS"},
            {"name": "Tracy Caldwell Dyson", "craft": "ISS"}
        ],
        "number": 3,
        "message": "success"
    }))
    .into_response()
}
