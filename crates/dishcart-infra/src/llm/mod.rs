//! Completion provider implementations.
//!
//! Contains concrete implementations of the [`CompletionProvider`] trait
//! defined in `dishcart-core`, and a factory ([`create_provider`]) that
//! builds the configured backend.
//!
//! [`CompletionProvider`]: dishcart_core::llm::provider::CompletionProvider

pub mod gemini;
pub mod http;
pub mod ollama;

use std::time::Duration;

use secrecy::SecretString;

use dishcart_core::llm::box_provider::BoxCompletionProvider;
use dishcart_types::config::ProviderSettings;
use dishcart_types::llm::{ProviderError, ProviderKind};

use self::gemini::GeminiProvider;
use self::ollama::OllamaProvider;

/// Create a [`BoxCompletionProvider`] from [`ProviderSettings`].
///
/// # Arguments
///
/// * `settings` - Backend kind, model, base URL and timeout
/// * `api_key` - The resolved API key, if any (read from the environment by the caller)
///
/// # Errors
///
/// Returns `AuthenticationFailed` if the backend requires an API key but none
/// is provided, or a transport error if the HTTP client cannot be built.
pub fn create_provider(
    settings: &ProviderSettings,
    api_key: Option<&str>,
) -> Result<BoxCompletionProvider, ProviderError> {
    let timeout = Duration::from_secs(settings.timeout_secs);
    let model = settings.resolved_model();
    let base_url = settings.resolved_base_url();

    if settings.kind.requires_api_key() && api_key.is_none_or(|key| key.trim().is_empty()) {
        return Err(ProviderError::AuthenticationFailed);
    }

    match settings.kind {
        ProviderKind::Gemini => {
            let secret = SecretString::from(api_key.unwrap_or_default().to_string());
            let provider = GeminiProvider::new(secret, model, timeout)?.with_base_url(base_url);
            Ok(BoxCompletionProvider::new(provider))
        }
        ProviderKind::Ollama => {
            let provider = OllamaProvider::new(model, timeout)?.with_base_url(base_url);
            Ok(BoxCompletionProvider::new(provider))
        }
    }
}
