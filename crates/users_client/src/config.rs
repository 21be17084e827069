//! API base-address configuration shared by every view.

use crate::error::ApiError;
use url::Url;

/// Address of the users API when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Where the users API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Builds a config, trimming whitespace and trailing slashes.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Checks that the base address is an absolute http(s) URL.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the address is empty, relative, or uses another scheme.
    pub fn validate(&self) -> Result<Url, ApiError> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|err| ApiError::Config(format!("invalid API base URL: {err}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ApiError::Config(format!(
                "unsupported API base URL scheme: {scheme}"
            ))),
        }
    }

    /// Joins an endpoint path onto the base address.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim();

        if self.api_base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
        }
    }
}
