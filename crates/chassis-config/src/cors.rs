use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: AnyOrArray,
    /// Allowed headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either the wildcard "*" or an explicit list of values
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnyOrArray {
    /// A single value; "*" means match anything
    Single(String),
    /// An explicit list; "*" anywhere in it means match anything
    List(Vec<String>),
}

impl AnyOrArray {
    /// Whether this setting matches any value
    pub fn is_wildcard(&self) -> bool {
        match self {
            Self::Single(value) => value == "*",
            Self::List(values) => values.iter().any(|value| value == "*"),
        }
    }

    /// The explicit values, one or many
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::List(values) => values,
        }
    }
}

impl Default for AnyOrArray {
    fn default() -> Self {
        Self::Single("*".to_string())
    }
}
