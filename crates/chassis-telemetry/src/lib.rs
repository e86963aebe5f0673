//! Logging for chassis services
//!
//! Wires the `tracing` ecosystem with an `EnvFilter` and a text or JSON
//! formatter. Export pipelines are a deployment concern, not part of the
//! scaffold.

use chassis_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// The filter comes from `RUST_LOG` when set, otherwise from the
/// configuration, otherwise from `fallback_filter`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, fallback_filter: &str) -> anyhow::Result<()> {
    let directive = config
        .and_then(|c| c.filter.as_deref())
        .unwrap_or(fallback_filter);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let format = config.map_or(LogFormat::Text, |c| c.format);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);
            registry.with(fmt_layer).try_init()?;
        }
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);
            registry.with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}
