use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    CalculateRequest, CalculateResponse, GenerateReportRequest, GenerateReportResponse,
    HistoryEntry, RedeemCheckResponse, RedeemCodeRequest, RedeemUseResponse,
};
use thiserror::Error;

use super::config::ClientConfig;

/// Transport-level failures talking to the backend
///
/// Business errors (an `error` or `message` field in the body) are not
/// `ApiError`s; they come back inside the decoded response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse response (status {status}): {message}")]
    Decode { status: u16, message: String },
}

/// Backend calls used by the life number form
#[async_trait(?Send)]
pub trait LifeApi {
    /// `POST /api/calculate`
    async fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse, ApiError>;

    /// `POST /api/redeem/check`
    async fn check_redeem_code(&self, request: &RedeemCodeRequest) -> Result<RedeemCheckResponse, ApiError>;

    /// `POST /api/redeem/use`
    async fn use_redeem_code(&self, request: &RedeemCodeRequest) -> Result<RedeemUseResponse, ApiError>;

    /// `POST /api/generate`
    async fn generate_report(&self, request: &GenerateReportRequest) -> Result<GenerateReportResponse, ApiError>;

    /// `GET /api/reports/history`
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError>;
}

/// API client for communicating with the backend server
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client from the default configuration
    pub fn new() -> Self {
        Self { config: ClientConfig::default() }
    }

    /// Create an API client talking to `base_url` instead of the configured origin
    pub fn with_base_url(base_url: &str) -> Self {
        Self { config: ClientConfig::with_api_base_url(base_url) }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.api_url(path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the JSON body whatever the status; the backend reports business
/// errors as JSON on 4xx/5xx responses too.
async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        status,
        message: e.to_string(),
    })
}

#[async_trait(?Send)]
impl LifeApi for ApiClient {
    async fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse, ApiError> {
        self.post_json("/api/calculate", request).await
    }

    async fn check_redeem_code(&self, request: &RedeemCodeRequest) -> Result<RedeemCheckResponse, ApiError> {
        self.post_json("/api/redeem/check", request).await
    }

    async fn use_redeem_code(&self, request: &RedeemCodeRequest) -> Result<RedeemUseResponse, ApiError> {
        self.post_json("/api/redeem/use", request).await
    }

    async fn generate_report(&self, request: &GenerateReportRequest) -> Result<GenerateReportResponse, ApiError> {
        self.post_json("/api/generate", request).await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.get_json("/api/reports/history").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_overrides_origin() {
        let client = ApiClient::with_base_url("http://127.0.0.1:5000/");
        assert_eq!(client.config().api_url("/api/generate"), "http://127.0.0.1:5000/api/generate");
        assert_eq!(client.config().report_path_prefix, "/report/");
        assert_ne!(client, ApiClient::with_base_url("http://127.0.0.1:5001"));
    }
}
