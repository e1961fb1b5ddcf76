//! Recipe handler: forwards the query in a fixed prompt and returns the raw answer.

use tracing::warn;

use crate::agent::prompt::recipe_prompt;
use crate::llm::provider::CompletionProvider;
use crate::llm::retry::{RetryPolicy, complete_with_retry};
use crate::tools::replies::provider_failure;

pub async fn recipe_reply<P: CompletionProvider>(
    provider: &P,
    retry: RetryPolicy,
    query: &str,
) -> String {
    match complete_with_retry(provider, &recipe_prompt(query), retry).await {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "Recipe request failed");
            provider_failure(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedProvider;
    use dishcart_types::llm::ProviderError;

    #[tokio::test]
    async fn test_returns_text_unmodified() {
        let provider = ScriptedProvider::replying(&["**Dal Tadka**\n- 1 cup toor dal\n"]);
        let reply = recipe_reply(&provider, RetryPolicy::none(), "dal tadka").await;
        assert_eq!(reply, "**Dal Tadka**\n- 1 cup toor dal\n");
        assert!(provider.prompts()[0].contains("dal tadka"));
    }

    #[tokio::test]
    async fn test_failure_becomes_apology() {
        let provider = ScriptedProvider::new(vec![Err(ProviderError::Timeout)]);
        let reply = recipe_reply(&provider, RetryPolicy::none(), "dal tadka").await;
        assert!(reply.starts_with("⚠️ Sorry"));
    }
}
