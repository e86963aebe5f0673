#![allow(clippy::must_use_candidate)]

//! Configuration for chassis services
//!
//! One module per section, loaded from a TOML file with `{{ env.VAR }}`
//! placeholder expansion and validated after parsing.

pub mod astro;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use astro::AstroConfig;
pub use cors::{AnyOrArray, CorsConfig};
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level chassis configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Outbound astronauts-feed client configuration
    #[serde(default)]
    pub astro: AstroConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
