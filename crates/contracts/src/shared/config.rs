//! Prediction service location.

/// Base URL used when no override is provided
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from an optional override value (e.g. a build-time env var).
    /// Blank or missing overrides fall back to [`DEFAULT_API_BASE`].
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self::new(v),
            _ => Self::default(),
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::from_override(None);
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.predict_url(), "http://127.0.0.1:5000/predict");
        assert_eq!(config.health_url(), "http://127.0.0.1:5000/health");
    }

    #[test]
    fn test_override() {
        let config = ClientConfig::from_override(Some("https://pricing.example.com/api/"));
        assert_eq!(config.predict_url(), "https://pricing.example.com/api/predict");
        assert_eq!(ClientConfig::from_override(Some("  ")), ClientConfig::default());
    }
}
