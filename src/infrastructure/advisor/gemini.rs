//! # Gemini Advisor
//!
//! [`QuoteAdvisor`] backed by the Gemini `generateContent` REST endpoint.
//!
//! The request is a single user turn holding the prompt. The response text
//! is the concatenation of the first candidate's text parts.
//!
//! # Examples
//!
//! ```
//! use freight_quote::config::AdvisorConfig;
//! use freight_quote::infrastructure::advisor::GeminiAdvisor;
//!
//! let advisor = GeminiAdvisor::from_config(&AdvisorConfig::default()).unwrap();
//! assert!(!advisor.has_credential());
//! assert!(advisor.endpoint().ends_with("/v1beta/models/gemini-2.5-flash:generateContent"));
//! ```

use crate::config::AdvisorConfig;
use crate::infrastructure::advisor::error::{AdvisorError, AdvisorResult};
use crate::infrastructure::advisor::http_client::HttpClient;
use crate::infrastructure::advisor::traits::QuoteAdvisor;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Reported when analysis is requested without a key.
pub const MISSING_KEY_MESSAGE: &str = "API Key is missing from environment variables.";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or `None` when there is no candidate.
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();
        Some(text)
    }
}

/// Gemini REST adapter.
#[derive(Clone)]
pub struct GeminiAdvisor {
    client: HttpClient,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl GeminiAdvisor {
    /// Creates an adapter from advisor settings.
    ///
    /// A missing key is not an error here; it is reported by
    /// [`QuoteAdvisor::analyze`] before any request is made.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::Connection` if the HTTP client cannot be built.
    pub fn from_config(config: &AdvisorConfig) -> AdvisorResult<Self> {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        Ok(Self {
            client: HttpClient::new(config.timeout_ms)?,
            api_key: config.api_key().map(str::to_string),
            model: config.model.clone(),
            endpoint,
        })
    }

    /// Returns true if an API key is configured.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `generateContent` URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn headers(&self) -> AdvisorResult<HeaderMap> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AdvisorError::missing_credential(MISSING_KEY_MESSAGE))?;
        let mut value = HeaderValue::from_str(key)
            .map_err(|_| AdvisorError::invalid_request("API key contains invalid characters"))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, value);
        Ok(headers)
    }
}

impl fmt::Debug for GeminiAdvisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiAdvisor")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("has_credential", &self.has_credential())
            .field("timeout_ms", &self.client.timeout_ms())
            .finish()
    }
}

#[async_trait]
impl QuoteAdvisor for GeminiAdvisor {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn analyze(&self, prompt: &str) -> AdvisorResult<String> {
        let headers = self.headers()?;

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            "requesting quote analysis"
        );

        let response: GenerateContentResponse = self
            .client
            .post_with_headers(&self.endpoint, &GenerateContentRequest::new(prompt), headers)
            .await?;

        response.into_text().ok_or(AdvisorError::EmptyResponse)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> AdvisorConfig {
        AdvisorConfig {
            api_key: key.map(str::to_string),
            base_url: "http://127.0.0.1:9/".to_string(),
            ..AdvisorConfig::default()
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn endpoint_joins_base_url_and_model() {
            let advisor = GeminiAdvisor::from_config(&config_with_key(Some("k"))).unwrap();
            assert_eq!(
                advisor.endpoint(),
                "http://127.0.0.1:9/v1beta/models/gemini-2.5-flash:generateContent"
            );
            assert_eq!(advisor.model(), "gemini-2.5-flash");
        }

        #[test]
        fn blank_key_counts_as_missing() {
            let advisor = GeminiAdvisor::from_config(&config_with_key(Some("  "))).unwrap();
            assert!(!advisor.has_credential());
        }

        #[test]
        fn debug_hides_key() {
            let advisor = GeminiAdvisor::from_config(&config_with_key(Some("secret-key"))).unwrap();
            let debug = format!("{:?}", advisor);
            assert!(!debug.contains("secret-key"));
            assert!(debug.contains("has_credential: true"));
        }
    }

    mod wire_format {
        use super::*;

        #[test]
        fn request_body_shape() {
            let body = serde_json::to_value(GenerateContentRequest::new("hello")).unwrap();
            assert_eq!(
                body,
                serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
            );
        }

        #[test]
        fn response_joins_first_candidate_parts() {
            let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
                "candidates": [
                    {"content": {"parts": [{"text": "Use "}, {"text": "Rongyun."}]}},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ]
            }))
            .unwrap();
            assert_eq!(response.into_text().as_deref(), Some("Use Rongyun."));
        }

        #[test]
        fn no_candidates_is_none() {
            let response: GenerateContentResponse =
                serde_json::from_value(serde_json::json!({"promptFeedback": {}})).unwrap();
            assert!(response.into_text().is_none());
        }
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let advisor = GeminiAdvisor::from_config(&config_with_key(None)).unwrap();
        let err = advisor.analyze("prompt").await.unwrap_err();
        assert_eq!(err, AdvisorError::missing_credential(MISSING_KEY_MESSAGE));
    }
}
