// Re-export network modules
pub mod api_client;

pub use api_client::{ApiClient, WorkflowsApi};

/// API route configuration.
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Minimal configuration pointing at the local development backend.
    /// Only meant for unit tests and very early start-up; production code
    /// constructs the real config with [`ApiConfig::new`] or
    /// [`ApiConfig::from_url`].
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    /// injected at build time.
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string.
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a full URL for a given path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
