//! Caller-side retry for completion calls.
//!
//! Providers make exactly one attempt. Callers that want more wrap the call
//! in [`complete_with_retry`]; with the default policy (zero retries) this is
//! a plain single call.

use std::time::Duration;

use tracing::warn;

use dishcart_types::config::ProviderSettings;
use dishcart_types::llm::ProviderError;

use super::provider::CompletionProvider;

/// How many extra attempts to make on transient failures, and how long to wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// Delay before retry `n` is `n * backoff`.
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
        }
    }

    pub fn from_settings(settings: &ProviderSettings) -> Self {
        Self {
            max_retries: settings.max_retries,
            backoff: Duration::from_millis(settings.retry_backoff_ms),
        }
    }

    /// Whether attempt number `attempt` (0-based retries so far) may be followed by another.
    pub fn should_retry(&self, error: &ProviderError, retries_so_far: u32) -> bool {
        error.is_retryable() && retries_so_far < self.max_retries
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Call `provider.complete(prompt)`, retrying transient failures per `policy`.
pub async fn complete_with_retry<P: CompletionProvider>(
    provider: &P,
    prompt: &str,
    policy: RetryPolicy,
) -> Result<String, ProviderError> {
    let mut retries = 0;
    loop {
        match provider.complete(prompt).await {
            Ok(text) => return Ok(text),
            Err(err) if policy.should_retry(&err, retries) => {
                retries += 1;
                warn!(
                    provider = provider.name(),
                    attempt = retries,
                    max_retries = policy.max_retries,
                    error = %err,
                    "Completion failed, retrying"
                );
                tokio::time::sleep(policy.backoff * retries).await;
            }
            Err(err) => return Err(err),
        }
    }
}
