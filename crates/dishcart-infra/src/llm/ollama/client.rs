//! OllamaProvider -- concrete [`CompletionProvider`] for a local Ollama server.
//!
//! Requests are always streamed; the chunks are concatenated before
//! `complete` returns, so callers see the same contract as Gemini.

use std::time::Duration;

use futures_util::StreamExt;
use tracing::debug;

use dishcart_core::llm::provider::CompletionProvider;
use dishcart_types::llm::{ProviderError, ProviderKind};

use super::streaming::{OllamaRequest, create_ollama_stream};
use crate::llm::http::build_client;

pub struct OllamaProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    pub fn new(model: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: ProviderKind::Ollama.default_base_url().to_string(),
            model,
        })
    }

    /// Override the base URL (useful for testing or remote servers).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

impl CompletionProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "Sending Ollama request");

        let body = OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: true,
        };
        let mut stream = create_ollama_stream(&self.client, &self.url(), body);

        let mut text = String::new();
        while let Some(fragment) = stream.next().await {
            text.push_str(&fragment?);
        }
        Ok(text)
    }
}
