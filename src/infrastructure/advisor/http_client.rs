//! # HTTP Client
//!
//! JSON-over-HTTP plumbing for advisor adapters.
//!
//! Wraps a `reqwest` client with a fixed timeout and maps transport and
//! status failures onto [`AdvisorError`].

use crate::infrastructure::advisor::error::{AdvisorError, AdvisorResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for advisor adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::Connection` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> AdvisorResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AdvisorError::connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a POST request with JSON body and custom headers.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails, a status error for
    /// non-2xx responses and `AdvisorError::ProtocolError` if the body
    /// cannot be parsed.
    pub async fn post_with_headers<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        headers: HeaderMap,
    ) -> AdvisorResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> AdvisorResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                AdvisorError::protocol_error(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(map_status_error(status, &error_body))
        }
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> AdvisorError {
        if error.is_timeout() {
            AdvisorError::timeout_with_duration("Request timed out", self.timeout_ms)
        } else if error.is_connect() {
            AdvisorError::connection(format!("Connection failed: {}", error))
        } else {
            AdvisorError::connection(format!("HTTP request failed: {}", error))
        }
    }
}

/// Maps an HTTP status code to an [`AdvisorError`].
fn map_status_error(status: StatusCode, body: &str) -> AdvisorError {
    match status {
        StatusCode::BAD_REQUEST => AdvisorError::invalid_request(format!("Bad request: {}", body)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AdvisorError::authentication(format!("Authentication failed: {}", body))
        }
        StatusCode::NOT_FOUND => {
            AdvisorError::protocol_error(format!("Resource not found: {}", body))
        }
        StatusCode::TOO_MANY_REQUESTS => AdvisorError::rate_limited("Rate limit exceeded"),
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            AdvisorError::connection(format!("Server error ({}): {}", status, body))
        }
        _ => AdvisorError::protocol_error(format!("HTTP error ({}): {}", status, body)),
    }
}
