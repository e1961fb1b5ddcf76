//! Scripted provider shared by the crate's unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use dishcart_types::llm::ProviderError;

use super::provider::CompletionProvider;

/// Replays queued replies in order and records every prompt it receives.
///
/// Once the script runs out, further calls fail with a transport error.
pub(crate) struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub(crate) fn new(replies: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Transport("script exhausted".to_string())));
        async move { reply }
    }
}
