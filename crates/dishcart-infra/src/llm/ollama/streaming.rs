//! Newline-delimited JSON stream decoding for Ollama `/api/generate`.
//!
//! With `"stream": true` the body is a sequence of JSON objects, one per
//! line:
//!
//! ```text
//! {"model":"llama3.2:3b","response":"add","done":false}
//! {"model":"llama3.2:3b","response":"_to_cart","done":false}
//! {"model":"llama3.2:3b","response":"","done":true,"total_duration":123}
//! ```
//!
//! Network frames do not line up with lines, so bytes are buffered until a
//! newline arrives. Blank lines are skipped; an `{"error": ...}` line ends
//! the stream with an error.

use std::pin::Pin;

use futures_util::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use dishcart_types::llm::ProviderError;

use crate::llm::http::{request_error, status_error};

/// Request body for `/api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// One decoded stream line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OllamaChunk {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Incremental line splitter and decoder.
#[derive(Debug, Default)]
pub struct NdjsonDecoder {
    buffer: Vec<u8>,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes and return every chunk completed by them.
    pub fn push(&mut self, bytes: &[u8]) -> Result<Vec<OllamaChunk>, ProviderError> {
        self.buffer.extend_from_slice(bytes);
        let mut chunks = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(chunk) = parse_line(&line)? {
                chunks.push(chunk);
            }
        }
        Ok(chunks)
    }

    /// Decode whatever is left once the body has ended (a final line without
    /// a trailing newline).
    pub fn finish(&mut self) -> Result<Option<OllamaChunk>, ProviderError> {
        let rest = std::mem::take(&mut self.buffer);
        parse_line(&rest)
    }
}

fn parse_line(line: &[u8]) -> Result<Option<OllamaChunk>, ProviderError> {
    let text = std::str::from_utf8(line)
        .map_err(|e| ProviderError::Stream(format!("invalid UTF-8 in stream: {e}")))?
        .trim();
    if text.is_empty() {
        return Ok(None);
    }
    let chunk: OllamaChunk = serde_json::from_str(text)
        .map_err(|e| ProviderError::Deserialization(format!("invalid stream line: {e}")))?;
    if let Some(message) = chunk.error {
        return Err(ProviderError::Stream(message));
    }
    Ok(Some(chunk))
}

/// Send the request and yield response text fragments in arrival order.
///
/// The stream ends after a `done: true` line or when the body ends.
pub fn create_ollama_stream(
    client: &reqwest::Client,
    url: &str,
    body: OllamaRequest,
) -> Pin<Box<dyn Stream<Item = Result<String, ProviderError>> + Send + 'static>> {
    let client = client.clone();
    let url = url.to_string();

    Box::pin(async_stream::try_stream! {
        let response = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;

        let response = if !response.status().is_success() {
            let err = status_error(response).await;
            tracing::warn!(error = %err, "Ollama API error response");
            Err::<(), _>(err)?;
            unreachable!()
        } else {
            response
        };

        let mut byte_stream = response.bytes_stream();
        let mut decoder = NdjsonDecoder::new();
        let mut finished = false;

        while !finished {
            let Some(bytes) = byte_stream.next().await else {
                break;
            };
            let bytes = bytes.map_err(request_error)?;
            for chunk in decoder.push(&bytes)? {
                if !chunk.response.is_empty() {
                    yield chunk.response;
                }
                if chunk.done {
                    finished = true;
                    break;
                }
            }
        }

        if !finished {
            if let Some(chunk) = decoder.finish()? {
                if !chunk.response.is_empty() {
                    yield chunk.response;
                }
            }
        }
    })
}
