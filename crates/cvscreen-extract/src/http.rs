//! HTTP-backed AI capabilities.
//!
//! Posts JSON to a text-generation endpoint and leniently parses the reply:
//! models frequently wrap their JSON in markdown fences or prose, so parsing
//! falls back from the raw body to a fenced block to the outermost brace
//! slice before giving up.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use async_trait::async_trait;

use crate::capability::{ClassifyBackend, CvExtractor};
use crate::error::{ExtractError, Result};
use crate::model::{ClassifyInput, CvExtraction, ExtractionRequest, RawClassification};

/// A text-generation endpoint speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct AiEndpoint {
    client: reqwest::Client,
    base_url: String,
}

impl AiEndpoint {
    /// Create an endpoint rooted at `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST `payload` to `{base_url}/{path}` and return the reply body.
    async fn post_json<P: Serialize + Sync>(&self, path: &str, payload: &P) -> Result<String> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "Calling AI endpoint");

        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Provider(format!(
                "{url} replied with status {status}"
            )));
        }
        Ok(response.text().await?)
    }
}

/// CV extractor backed by an [`AiEndpoint`].
#[derive(Debug, Clone)]
pub struct HttpExtractor {
    endpoint: AiEndpoint,
}

impl HttpExtractor {
    /// Create an extractor talking to the given endpoint.
    #[must_use]
    pub const fn new(endpoint: AiEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl CvExtractor for HttpExtractor {
    async fn extract(
        &self,
        request: &ExtractionRequest,
        cancel: &CancellationToken,
    ) -> Result<CvExtraction> {
        let reply = tokio::select! {
            () = cancel.cancelled() => return Err(ExtractError::Cancelled),
            reply = self.endpoint.post_json("extract-cv", request) => reply?,
        };
        lenient_json(&reply)
    }
}

/// Email classifier backed by an [`AiEndpoint`].
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    endpoint: AiEndpoint,
}

impl HttpClassifier {
    /// Create a classifier talking to the given endpoint.
    #[must_use]
    pub const fn new(endpoint: AiEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl ClassifyBackend for HttpClassifier {
    async fn classify(&self, input: &ClassifyInput) -> Result<RawClassification> {
        let reply = self.endpoint.post_json("classify-email", input).await?;
        lenient_json(&reply)
    }
}

/// Parse `text` into `T`, tolerating the shapes models actually return.
///
/// Tried in order: the raw body, the content of the first fenced code block,
/// the slice between the first `{` and the last `}`.
pub fn lenient_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    if let Some(block) = fenced_block(text)
        && let Ok(value) = serde_json::from_str(block)
    {
        return Ok(value);
    }

    if let Some(slice) = brace_slice(text)
        && let Ok(value) = serde_json::from_str(slice)
    {
        return Ok(value);
    }

    Err(ExtractError::Parse(format!(
        "No JSON object found in reply ({} bytes)",
        text.len()
    )))
}

/// Content of the first ``` fenced block, with an optional language tag.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}

/// The slice spanning the first `{` through the last `}`.
fn brace_slice(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
