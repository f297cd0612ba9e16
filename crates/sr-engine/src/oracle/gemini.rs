//! HTTP oracle backed by the Gemini `generateContent` endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TextOracle;
use crate::error::{OracleError, OracleResult};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Base URL of the public Generative Language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text oracle that calls a Gemini model over HTTPS.
pub struct GeminiOracle {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiOracle {
    /// Build an oracle for `api_key` whose requests give up after `timeout`.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> OracleResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a different API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl TextOracle for GeminiOracle {
    fn complete(&self, prompt: &str) -> OracleResult<String> {
        let url = self.url();
        debug!(%url, model = %self.model, "sending oracle request");

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest::new(prompt))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        let body: GenerateResponse = resp.json()?;
        body.text()
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

impl GenerateRequest {
    fn new(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> OracleResult<String> {
        let content = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .ok_or_else(|| OracleError::Malformed("no candidates".to_string()))?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            return Err(OracleError::EmptyReply);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_shape() {
        let v = serde_json::to_value(GenerateRequest::new("pick a fruit")).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "pick a fruit");
    }

    #[test]
    fn response_text_joins_parts() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"mango"},{"text":"\n"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(body.text().unwrap(), "mango\n");
    }

    #[test]
    fn response_without_candidates_is_malformed() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(matches!(body.text(), Err(OracleError::Malformed(_))));
    }

    #[test]
    fn blank_response_is_empty() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert!(matches!(body.text(), Err(OracleError::EmptyReply)));
    }

    #[test]
    fn url_uses_model() {
        let o = GeminiOracle::new("k", Duration::from_secs(1))
            .unwrap()
            .with_endpoint("http://localhost:9/v1beta/")
            .with_model("gemini-1.5-flash");
        assert_eq!(
            o.url(),
            "http://localhost:9/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(o.model(), "gemini-1.5-flash");
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        let o = GeminiOracle::new("k", Duration::from_millis(500))
            .unwrap()
            .with_endpoint("http://127.0.0.1:9");
        assert!(matches!(
            o.complete("hello"),
            Err(OracleError::Transport(_))
        ));
    }
}
