//! HTTP seam between the API clients and the network.
//!
//! Clients build [`ApiRequest`]s against relative paths; a [`HttpBackend`]
//! sends them. [`ReqwestBackend`] is the production implementation and owns
//! transport details only: base URL, timeout, default headers and mapping
//! low-level failures onto [`TransportFailure`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL.
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportFailure {
    /// Sent, but nothing came back (timeout, connection loss).
    #[error("no response: {0}")]
    NoResponse(String),

    /// Could not be built or sent at all.
    #[error("{0}")]
    Construction(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportFailure>;
}

/// Reqwest-backed [`HttpBackend`].
pub struct ReqwestBackend {
    client: Client,
    config: ApiConfig,
}

impl ReqwestBackend {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::RequestConstruction(e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::RequestConstruction(e.to_string()))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::RequestConstruction(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn shared(config: ApiConfig) -> Result<Arc<dyn HttpBackend>, ApiError> {
        Ok(Arc::new(Self::new(config)?))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportFailure> {
        let url = self.config.url(&request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        debug!(method = %method, url = %url, "sending request");

        let mut builder = self.client.request(method, url.as_str());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportFailure::NoResponse(e.to_string()))?;
        debug!(status, bytes = body.len(), url = %url, "response received");

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn map_send_error(error: reqwest::Error) -> TransportFailure {
    if error.is_builder() {
        TransportFailure::Construction(error.to_string())
    } else if error.is_timeout() || error.is_connect() || error.is_request() {
        TransportFailure::NoResponse(error.to_string())
    } else {
        TransportFailure::Construction(error.to_string())
    }
}

/// Send a request and decode a JSON success body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    backend: &dyn HttpBackend,
    request: ApiRequest,
) -> Result<T, ApiError> {
    let response = send(backend, request).await?;
    serde_json::from_slice(&response.body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Send a request whose success body is ignored.
pub(crate) async fn fetch_empty(
    backend: &dyn HttpBackend,
    request: ApiRequest,
) -> Result<(), ApiError> {
    send(backend, request).await.map(|_| ())
}

async fn send(backend: &dyn HttpBackend, request: ApiRequest) -> Result<ApiResponse, ApiError> {
    let method = request.method;
    let path = request.path.clone();
    let response = backend.execute(request).await.map_err(|failure| {
        tracing::warn!(?method, path = %path, error = %failure, "request failed");
        ApiError::from(failure)
    })?;

    if !response.is_success() {
        let err = ApiError::from_status(response.status, &response.body);
        tracing::warn!(?method, path = %path, status = response.status, error = %err, "server rejected request");
        return Err(err);
    }
    Ok(response)
}

pub(crate) fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::RequestConstruction(e.to_string()))
}
