use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
    Extension,
};
use serde_json::json;
use users_client::ApiConfig;

/// Global the web app reads its runtime settings from.
pub const CONFIG_GLOBAL: &str = "USERDESK_CONFIG";

/// Runtime settings for the browser, loaded by `index.html` before the wasm bundle.
pub async fn config_js(Extension(api): Extension<ApiConfig>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (CACHE_CONTROL, "no-store"),
        ],
        render(&api),
    )
}

fn render(api: &ApiConfig) -> String {
    let settings = json!({ "api_base_url": api.api_base_url });
    format!("window.{CONFIG_GLOBAL} = {settings};\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_escapes_the_url() {
        let api = ApiConfig::new("http://localhost:8080/\"</script>");
        let script = render(&api);
        assert!(script.starts_with("window.USERDESK_CONFIG = {"));
        assert!(script.contains("\\\"</script>"));
    }
}
