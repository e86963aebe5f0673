//! Programmatic configuration builder for integration tests

use chassis_config::Config;

/// Builds a `Config` the way a deployment's TOML file would
pub struct ConfigBuilder {
    astro_base_url: String,
    health: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            // Unroutable port so tests that never call /astro stay offline
            astro_base_url: "http://127.0.0.1:9".to_owned(),
            health: true,
        }
    }

    /// Point the astro client at a mock feed
    pub fn with_astro_base_url(mut self, base_url: &str) -> Self {
        self.astro_base_url = base_url.to_owned();
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.health = false;
        self
    }

    pub fn build(self) -> Config {
        let raw = format!(
            r#"
[server.health]
enabled = {health}

[astro]
base_url = "{base_url}"
"#,
            health = self.health,
            base_url = self.astro_base_url,
        );

        Config::from_toml(&raw).expect("test config must parse")
    }
}
