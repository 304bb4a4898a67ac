//! Client Configuration
//!
//! The bundle is compiled ahead of time, so settings are read from
//! compile-time environment variables rather than the process environment.

/// Base URL used when `FOOD_API_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Static settings for the REST client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Service root, without a trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build from `FOOD_API_URL`, falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Self {
        Self::from_value(option_env!("FOOD_API_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:3333");
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ApiConfig::new("https://api.example.com//");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        assert_eq!(ApiConfig::from_value(Some("   ")), ApiConfig::default());
        assert_eq!(ApiConfig::from_value(None), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_value(Some(" http://10.0.0.2:8080/ ")).base_url,
            "http://10.0.0.2:8080"
        );
    }
}
