/// Build-time override for the backend origin, e.g. `http://localhost:5000`
const API_BASE_URL_ENV: Option<&str> = option_env!("LIFE_API_BASE_URL");

const REPORT_PATH_PREFIX: &str = "/report/";

/// Runtime configuration for the client
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Origin prepended to every `/api/...` path; empty means same-origin
    pub api_base_url: String,
    /// Path prefix of the report page; the report id is appended
    pub report_path_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base_url(API_BASE_URL_ENV.unwrap_or_default())
    }
}

impl ClientConfig {
    pub fn with_api_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim().trim_end_matches('/').to_string(),
            report_path_prefix: REPORT_PATH_PREFIX.to_string(),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
