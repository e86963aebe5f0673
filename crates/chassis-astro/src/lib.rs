//! Outbound client for the "who is in space" astronauts feed
//!
//! Deliberately minimal: one GET per call, transport-default timeouts, no
//! retry. Every failure surfaces as [`AppError::RemoteService`] attributed
//! to the client's declared service name.

use chassis_config::AstroConfig;
use chassis_core::AppError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Logical service name used for error attribution
pub const SERVICE_NAME: &str = "mock-api-client";

/// Path of the astronauts feed under the configured base URL
const ASTRONAUTS_PATH: &str = "/astros.json";

/// Client for the remote astronauts feed
///
/// Configuration is fixed at construction and never mutated; the inner
/// `reqwest::Client` is safe to share across requests.
#[derive(Debug, Clone)]
pub struct AstroClient {
    client: Client,
    base_url: String,
}

/// Astronauts currently in space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstronautsResponse {
    pub people: Vec<Astronaut>,
    pub number: u32,
    pub message: String,
}

/// One person aboard a craft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Astronaut {
    pub name: String,
    pub craft: String,
}

impl AstroClient {
    /// Create a client for the configured feed
    #[must_use]
    pub fn new(config: &AstroConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch the current list of astronauts
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure returns
    /// [`AppError::RemoteService`] tagged with [`SERVICE_NAME`], preserving
    /// the underlying message
    pub async fn astronauts(&self) -> Result<AstronautsResponse, AppError> {
        let url = format!("{}{ASTRONAUTS_PATH}", self.base_url);

        tracing::info!(method = "GET", url = %url, "sending astro request");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!(service = SERVICE_NAME, error = %e, "astro request failed");
                AppError::remote_service(SERVICE_NAME, e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(
                service = SERVICE_NAME,
                status = %status,
                "astro feed returned an error: {body}"
            );

            return Err(AppError::remote_service(
                SERVICE_NAME,
                format!("unexpected status {status}: {body}"),
            ));
        }

        let astronauts: AstronautsResponse = response.json().await.map_err(|e| {
            tracing::error!(service = SERVICE_NAME, error = %e, "failed to decode astro response");
            AppError::remote_service(SERVICE_NAME, e.to_string())
        })?;

        tracing::debug!(
            service = SERVICE_NAME,
            number = astronauts.number,
            "astro request complete"
        );

        Ok(astronauts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_payload_deserializes() {
        let raw = r#"{
            "people": [
                {"name": "Oleg Kononenko", "craft": "ISS"},
                {"name": "Jeanette Epps", "craft": "ISS"}
            ],
            "number": 2,
            "message": "success"
        }"#;

        let feed: AstronautsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(feed.number, 2);
        assert_eq!(feed.people.len(), 2);
        assert_eq!(feed.people[0].craft, "ISS");
        assert_eq!(feed.message, "success");
    }

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let config = AstroConfig::default();
        let client = AstroClient::new(&config);
        assert_eq!(client.base_url, "http://api.open-notify.org");
    }
}
