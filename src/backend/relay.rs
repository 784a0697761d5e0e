use super::{cache::ExplainCache, config::ExplainConfig, REQUEST_ID_HEADER};
use crate::explain::{ExplainError, ExplainRequest};
use futures_util::StreamExt;
use reqwest::redirect::Policy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Semaphore;

const USER_AGENT: &str = "research-portfolio-relay/1.0";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheDecision {
    Hit,
    Miss,
}

impl CacheDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
        }
    }
}

/// Body of a `generateContent` call.
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<GenerateContent>,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![GenerateContent {
                role: Some("user".to_string()),
                parts: vec![GeneratePart { text: Some(prompt) }],
            }],
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerateContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeneratePart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<GenerateCandidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateCandidate {
    #[serde(default)]
    pub content: Option<GenerateContent>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

pub struct Relay {
    config: ExplainConfig,
    client: reqwest::Client,
    cache: ExplainCache,
    permits: Arc<Semaphore>,
}

impl Relay {
    pub fn new(config: ExplainConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            cache: ExplainCache::new(config.cache_ttl, config.cache_max_entries),
            permits: Arc::new(Semaphore::new(config.max_concurrency)),
            client,
            config,
        })
    }

    pub async fn explain(
        &self,
        request: &ExplainRequest,
        request_id: &str,
    ) -> Result<(String, CacheDecision), ExplainError> {
        let key = request.cache_key();
        if let Some(text) = self.cache.get(&key).await {
            return Ok((text, CacheDecision::Hit));
        }

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| ExplainError::Network)?;

        // A request that waited for a permit may find its answer already cached.
        if let Some(text) = self.cache.get(&key).await {
            return Ok((text, CacheDecision::Hit));
        }

        let text = self.call_upstream(request, request_id).await?;
        self.cache.insert(key, text.clone()).await;
        Ok((text, CacheDecision::Miss))
    }

    async fn call_upstream(
        &self,
        request: &ExplainRequest,
        request_id: &str,
    ) -> Result<String, ExplainError> {
        let response = self
            .client
            .post(self.config.upstream_url.clone())
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(REQUEST_ID_HEADER, request_id)
            .json(&GenerateRequest::from_prompt(request.prompt()))
            .send()
            .await
            .map_err(|_| ExplainError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplainError::Status(status.as_u16()));
        }

        let body = read_limited_body(response, self.config.response_max_bytes).await?;
        let payload: GenerateResponse =
            serde_json::from_slice(&body).map_err(|_| ExplainError::Decode)?;

        payload.text().ok_or(ExplainError::EmptyAnswer)
    }
}

async fn read_limited_body(
    response: reqwest::Response,
    max_response_bytes: usize,
) -> Result<Vec<u8>, ExplainError> {
    if response
        .content_length()
        .is_some_and(|length| length > max_response_bytes as u64)
    {
        return Err(ExplainError::TooLarge);
    }

    let mut stream = response.bytes_stream();
    let mut body: Vec<u8> = Vec::with_capacity(8192);

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|_| ExplainError::Network)?;

        if body.len() + chunk.len() > max_response_bytes {
            return Err(ExplainError::TooLarge);
        }

        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generate_request_wraps_prompt_as_user_turn() {
        let value = serde_json::to_value(GenerateRequest::from_prompt("hello".to_string()))
            .expect("serializes");
        assert_eq!(
            value,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let payload: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Plain " }, { "text": "words. " }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .expect("deserializes");
        assert_eq!(payload.text().as_deref(), Some("Plain words."));
    }

    #[test]
    fn response_without_text_is_empty() {
        let payload: GenerateResponse =
            serde_json::from_value(json!({ "candidates": [] })).expect("deserializes");
        assert_eq!(payload.text(), None);

        let payload: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        }))
        .expect("deserializes");
        assert_eq!(payload.text(), None);
    }
}
