//! API client configuration
//!
//! One `ApiConfig` is constructed at application start and handed to the
//! `ApiClient`, which is passed down through context. Nothing mutates it
//! afterwards; there is no module-level base URL.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the identification API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout. Ignored on wasm, where fetch has no timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Configuration baked in at compile time: `PETAL_API_BASE_URL` when
    /// set during the build, the local development server otherwise.
    pub fn from_build_env() -> Self {
        let base_url = option_env!("PETAL_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL);
        Self::new(base_url, DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("https://api.example.com/", DEFAULT_TIMEOUT);
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn default_points_at_local_dev_server() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:8000");
    }
}
