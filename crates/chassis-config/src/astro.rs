use serde::Deserialize;
use url::Url;

/// Default base URL of the astronauts feed
const DEFAULT_BASE_URL: &str = "http://api.open-notify.org";

/// Outbound astronauts-feed client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AstroConfig {
    /// Base URL of the remote feed
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

impl Default for AstroConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url must parse")
}
