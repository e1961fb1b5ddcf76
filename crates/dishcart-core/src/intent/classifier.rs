//! LLM-backed intent classifier.
//!
//! The model is asked for a single label. Its output is trimmed and
//! lower-cased, then matched exactly; there is no fuzzy matching, so extra
//! words or punctuation make the result `Unrecognized`.

use std::sync::Arc;

use tracing::debug;

use dishcart_types::intent::{Classification, Intent};
use dishcart_types::llm::ProviderError;

use crate::agent::prompt::classification_prompt;
use crate::llm::provider::CompletionProvider;
use crate::llm::retry::{RetryPolicy, complete_with_retry};

/// Maps a user message onto one of the tool intents.
pub struct IntentClassifier<P: CompletionProvider> {
    provider: Arc<P>,
    retry: RetryPolicy,
}

impl<P: CompletionProvider> IntentClassifier<P> {
    pub fn new(provider: Arc<P>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    /// Ask the provider for a label and parse it.
    ///
    /// Provider failures are returned as-is; the caller decides whether the
    /// turn continues.
    #[tracing::instrument(name = "classify_intent", skip(self, message), fields(provider = self.provider.name()))]
    pub async fn classify(&self, message: &str) -> Result<Classification, ProviderError> {
        let prompt = classification_prompt(message);
        let raw = complete_with_retry(self.provider.as_ref(), &prompt, self.retry).await?;
        let classification = parse_classification(&raw);
        debug!(raw = %raw.trim(), ?classification, "Classified message");
        Ok(classification)
    }
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn parse_classification(raw: &str) -> Classification {
    let label = normalize_label(raw);
    match Intent::from_tool_label(&label) {
        Some(intent) => Classification::Recognized(intent),
        None => Classification::Unrecognized { raw: label },
    }
}
