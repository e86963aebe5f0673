use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from raw TOML text
    ///
    /// Expands `{{ env.VAR }}` placeholders, then deserializes and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded)
            .map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the astro base URL uses a non-HTTP scheme or the
    /// health path is malformed
    pub fn validate(&self) -> anyhow::Result<()> {
        let scheme = self.astro.base_url.scheme();
        if !matches!(scheme, "http" | "https") {
            anyhow::bail!("astro.base_url must use http or https, got `{scheme}`");
        }

        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with `/`");
        }

        Ok(())
    }
}
