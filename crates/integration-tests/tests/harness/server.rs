//! Test server wrapper that starts chassis on a random port

use chassis_config::Config;
use chassis_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
///
/// The server is torn down when the instance is dropped.
pub struct TestServer {
    base_url: String,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Ignores the configured listen address and binds to port 0 so tests
    /// can run in parallel.
    pub async fn start(config: &Config) -> anyhow::Result<Self> {
        let router = Server::new(config).into_router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            base_url,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    /// Full URL for a path on the running test server
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
