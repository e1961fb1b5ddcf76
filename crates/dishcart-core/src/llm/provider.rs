//! CompletionProvider trait definition.
//!
//! This is the core abstraction that every completion backend implements:
//! a prompt goes in, the full generated text comes out. Backends that
//! stream internally concatenate their chunks before returning.

use dishcart_types::llm::ProviderError;

/// Trait for text-completion backends (Gemini, Ollama, ...).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in dishcart-infra (e.g., `GeminiProvider`).
///
/// Implementations must not retry; retry policy belongs to the caller
/// (see [`crate::llm::retry`]).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini", "ollama").
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send a prompt and wait for the complete response text.
    ///
    /// Non-success statuses, transport failures and timeouts all surface as
    /// [`ProviderError`] values, never as panics.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, ProviderError>> + Send;
}
