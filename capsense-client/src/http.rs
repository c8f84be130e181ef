use async_trait::async_trait;
use capsense_types::{AnalysisResult, AnalyzeRequest, DashboardRow, ErrorResponse, FeedbackRequest};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::{client::CapsenseApi, error::CapsenseError};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP client for a CapSense backend
pub struct CapsenseClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl CapsenseClient {
    /// Create a client for the given base URL. No request timeout is set.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CapsenseError> {
        let base_url = normalize_base_url(base_url.into())?;
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| CapsenseError::Network { source: e })?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Rebuild the underlying HTTP client with a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, CapsenseError> {
        self.http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CapsenseError::Network { source: e })?;
        Ok(self)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Turn a response into either the decoded 2xx body or an API error
    /// carrying the server's `error` field when the body has one.
    async fn read_body(response: reqwest::Response) -> Result<String, CapsenseError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            trace!(status = status.as_u16(), body = %body, "Response body");
            return Ok(body);
        }

        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.error);

        warn!(
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "CapSense API returned an error status"
        );

        Err(CapsenseError::api_error(status.as_u16(), message))
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CapsenseError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl CapsenseApi for CapsenseClient {
    async fn fetch_dashboard(&self) -> Result<Vec<DashboardRow>, CapsenseError> {
        let url = self.url("/api/dashboard");
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        Self::decode(&body)
    }

    async fn post_feedback(&self, request: &FeedbackRequest) -> Result<(), CapsenseError> {
        let url = self.url("/api/feedback");
        debug!("POST {} ({})", url, request.feedback);

        let response = self
            .http_client
            .post(&url)
            .headers(Self::json_headers())
            .json(request)
            .send()
            .await?;

        Self::read_body(response).await.map(|_| ())
    }

    async fn analyze_text(
        &self,
        request: &AnalyzeRequest,
    ) -> Result<AnalysisResult, CapsenseError> {
        let url = self.url("/batch-analyze");
        debug!("POST {} ({} chars)", url, request.text.chars().count());

        let response = self
            .http_client
            .post(&url)
            .headers(Self::json_headers())
            .json(request)
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        Self::decode(&body)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn normalize_base_url(raw: String) -> Result<String, CapsenseError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(CapsenseError::validation("Base URL cannot be empty"));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(CapsenseError::validation(format!(
            "Base URL must start with http:// or https://, got '{trimmed}'"
        )));
    }
    Ok(trimmed.to_string())
}
