//! GeminiProvider -- concrete [`CompletionProvider`] for Google Gemini.
//!
//! Sends one `POST {base}/models/{model}:generateContent` per prompt and
//! returns the first candidate's text.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! as the `key` query parameter when the request is built.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use dishcart_core::llm::provider::CompletionProvider;
use dishcart_types::llm::{ProviderError, ProviderKind};

use super::types::{GeminiRequest, GeminiResponse};
use crate::llm::http::{build_client, request_error, status_error};

/// Google Gemini completion provider.
///
/// Does not derive Debug so the key cannot end up in logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString, model: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            base_url: ProviderKind::Gemini.default_base_url().to_string(),
            model,
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "Sending Gemini request");

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&GeminiRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: GeminiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::Deserialization(format!("failed to parse response: {}", e.without_url()))
            }
        })?;

        body.first_text().map(str::to_string).ok_or_else(|| {
            ProviderError::Deserialization("response has no candidate text".to_string())
        })
    }
}
