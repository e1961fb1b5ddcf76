//! Fallback for messages that matched no tool intent.

use tracing::warn;

use crate::agent::prompt::chitchat_prompt;
use crate::llm::provider::CompletionProvider;
use crate::llm::retry::{RetryPolicy, complete_with_retry};
use crate::tools::replies::provider_failure;

pub async fn chitchat_reply<P: CompletionProvider>(
    provider: &P,
    retry: RetryPolicy,
    message: &str,
) -> String {
    match complete_with_retry(provider, &chitchat_prompt(message), retry).await {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "Chitchat reply failed");
            provider_failure(&err)
        }
    }
}
