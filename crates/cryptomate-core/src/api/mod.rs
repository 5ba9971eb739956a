//! Typed REST client for the prediction backend.
//!
//! Every operation is a single request: no retries, no batching, no
//! deduplication. Paths follow `{base_url}/{data_source}/{resource}`.

mod bars;
mod models;
mod predictions;
mod symbols;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::{DataSource, ValidationError};

pub use bars::BarsApi;
pub use models::{CreateModelRequest, ModelPatch, ModelsApi};
pub use predictions::PredictionsApi;
pub use symbols::SymbolsApi;

/// Failure modes of a backend call, each with a stable machine code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("failed to encode request body: {message}")]
    Encode { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "api.transport",
            Self::Status { .. } => "api.status",
            Self::Decode { .. } => "api.decode",
            Self::Encode { .. } => "api.encode",
            Self::Validation(_) => "api.validation",
        }
    }
}

/// Client configuration: where the backend lives and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout_ms: u64,
}

impl ApiConfig {
    /// Default base URL of a locally running backend.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    pub fn new(base_url: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl { value: raw });
        }

        Ok(Self {
            base_url: trimmed.to_owned(),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        })
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL).expect("default base url is valid")
    }
}

/// Entry point for all backend calls; hand out per-resource views via
/// [`symbols`](ApiClient::symbols), [`bars`](ApiClient::bars),
/// [`models`](ApiClient::models) and [`predictions`](ApiClient::predictions).
pub struct ApiClient {
    config: ApiConfig,
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn symbols(&self) -> SymbolsApi<'_> {
        SymbolsApi::new(self)
    }

    pub fn bars(&self) -> BarsApi<'_> {
        BarsApi::new(self)
    }

    pub fn models(&self) -> ModelsApi<'_> {
        ModelsApi::new(self)
    }

    pub fn predictions(&self) -> PredictionsApi<'_> {
        PredictionsApi::new(self)
    }

    /// `{base}/{ds}/{resource}`
    pub(crate) fn resource_url(&self, source: DataSource, resource: &str) -> String {
        format!("{}/{}/{}", self.config.base_url, source.as_str(), resource)
    }

    /// `{base}/{ds}/{resource}/{item}` with the item segment percent-encoded.
    pub(crate) fn item_url(&self, source: DataSource, resource: &str, item: &str) -> String {
        format!(
            "{}/{}",
            self.resource_url(source, resource),
            urlencoding::encode(item)
        )
    }

    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();

        let response = self
            .http
            .execute(request.with_timeout_ms(self.config.timeout_ms))
            .await
            .map_err(|e| ApiError::Transport {
                message: e.message().to_owned(),
            })?;

        tracing::debug!(%method, %url, status = response.status, "backend call completed");

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: status_message(&response),
            });
        }

        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self.send(HttpRequest::get(url)).await?;
        decode(&response.body)
    }

    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: String,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(json_request(method, url, body)?).await?;
        decode(&response.body)
    }

    /// Issue a mutation and treat any 2xx as success, ignoring the body.
    /// The backend answers PATCH and DELETE with an empty 204.
    pub(crate) async fn send_json_expect_success<B: Serialize>(
        &self,
        method: HttpMethod,
        url: String,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(json_request(method, url, body)?).await?;
        Ok(())
    }

    pub(crate) async fn send_expect_success(
        &self,
        method: HttpMethod,
        url: String,
    ) -> Result<(), ApiError> {
        self.send(HttpRequest::new(method, url)).await?;
        Ok(())
    }
}

fn json_request<B: Serialize>(
    method: HttpMethod,
    url: String,
    body: &B,
) -> Result<HttpRequest, ApiError> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Encode {
        message: e.to_string(),
    })?;
    Ok(HttpRequest::new(method, url).with_json_body(payload))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        message: e.to_string(),
    })
}

/// Best-effort human message from an error response; the backend wraps
/// messages as `{"error": "..."}`.
fn status_message(response: &HttpResponse) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&response.body) {
        return parsed.error;
    }

    let trimmed = response.body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        trimmed.to_owned()
    }
}
