//! HTTP surface of the chassis scaffold
//!
//! Assembles the demonstration routes, the request-context and recovery
//! middleware, and the problem-response glue that turns presented
//! [`chassis_core::Problem`]s into `application/problem+json` responses.

mod astro;
mod context;
mod cors;
mod extract;
mod health;
mod hello;
mod problem;
mod recover;

pub use context::REQUEST_ID_HEADER;
pub use extract::{Path, ProblemRejection, Query};
pub use problem::{error_response, problem_response};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chassis_astro::AstroClient;
use chassis_config::Config;
use tower_http::trace::TraceLayer;

/// Shared state for route handlers
#[derive(Clone)]
pub struct AppState {
    pub(crate) astro: Arc<AstroClient>,
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        let state = AppState {
            astro: Arc::new(AstroClient::new(&config.astro)),
        };

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(
                &config.server.health.path,
                axum::routing::get(health::health_handler),
            );
        }

        // Demonstration routes
        app = app.merge(
            Router::new()
                .route("/hello", axum::routing::get(hello::hello_handler))
                .route("/astro", axum::routing::get(astro::astro_handler))
                .with_state(state),
        );

        // Apply middleware layers (innermost first)

        // Panic recovery (innermost, so a panicking handler still gets a
        // problem response built from the ambient context)
        app = app.layer(axum::middleware::from_fn(recover::recover_middleware));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        // Request context (outermost — extractors, handlers, and the
        // recovery layer all read the extension it inserts)
        app = app.layer(axum::middleware::from_fn(
            context::request_context_middleware,
        ));

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
