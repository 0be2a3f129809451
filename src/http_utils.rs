//! HTTP utilities for the Zeabur CLI client.
//!
//! This module owns the single `reqwest` client used to talk to the GraphQL
//! endpoint, together with its settings (endpoint, timeout, default headers).
//! Everything that can go wrong below the GraphQL layer is reported as a
//! [`TransportError`].

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, trace};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.zeabur.com/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Failure to complete an HTTP exchange with the API
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, TLS, timeout or request construction failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status code
    #[error("unexpected response status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// The response body was not the JSON document we expected
    #[error("malformed response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Configuration for HTTP requests with common settings
#[derive(Debug, Clone)]
pub struct HttpRequestConfig {
    /// URL of the GraphQL endpoint
    pub endpoint: String,
    /// Default headers to include with all requests
    pub default_headers: HashMap<String, String>,
    /// Request timeout in seconds
    pub timeout: u64,
}

fn default_headers() -> HashMap<String, String> {
    let mut default_headers = HashMap::new();
    default_headers.insert(
        "User-Agent".to_string(),
        format!("zcli/{}", env!("CARGO_PKG_VERSION")),
    );
    default_headers
}

impl Default for HttpRequestConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            default_headers: default_headers(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HttpRequestConfig {
    pub fn from_configuration(configuration: &crate::configuration::Configuration) -> Self {
        Self {
            endpoint: configuration.api_endpoint(),
            default_headers: default_headers(),
            timeout: configuration.timeout(),
        }
    }

    /// Same settings, pointed at another endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// HTTP client wrapper with common request handling logic
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpRequestConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: HttpRequestConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get a reference to the HTTP client configuration
    pub fn config(&self) -> &HttpRequestConfig {
        &self.config
    }

    /// POST a JSON body to the endpoint with a bearer token and decode the JSON answer.
    ///
    /// Exactly one request is sent. Nothing is retried.
    pub async fn post<T, B>(&self, body: &B, auth_token: &str) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(auth_token)
            .json(body);

        for (key, value) in &self.config.default_headers {
            request = request.header(key, value);
        }

        debug!("POST {}", self.config.endpoint);
        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}", status);
            return Err(TransportError::Status { status, body });
        }

        let response_text = response.text().await?;
        trace!("Raw response text for deserialization: {}", response_text);

        match serde_json::from_str::<T>(&response_text) {
            Ok(result) => Ok(result),
            Err(e) => {
                error!(
                    "Failed to deserialize response: {}. Raw response: {}",
                    e, response_text
                );
                Err(TransportError::InvalidBody(e))
            }
        }
    }
}
