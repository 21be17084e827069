use super::config::AppConfig;
use users_client::{ApiConfig, ApiError, HttpUsersApi};

/// Client for the users API at the configured base address.
///
/// Built per request so a changed `window.USERDESK_CONFIG` applies without a reload.
pub(crate) fn users_api() -> Result<HttpUsersApi, ApiError> {
    let config = AppConfig::load();
    HttpUsersApi::new(ApiConfig::new(&config.api_base_url))
}
