//! BoxCompletionProvider -- object-safe dynamic dispatch wrapper for CompletionProvider.
//!
//! 1. Define an object-safe `CompletionProviderDyn` trait with boxed futures
//! 2. Blanket-impl `CompletionProviderDyn` for all `T: CompletionProvider`
//! 3. `BoxCompletionProvider` wraps `Box<dyn CompletionProviderDyn>` and
//!    implements `CompletionProvider` itself, so generic services accept it

use std::future::Future;
use std::pin::Pin;

use dishcart_types::llm::ProviderError;

use super::provider::CompletionProvider;

/// Object-safe version of [`CompletionProvider`] with boxed futures.
pub trait CompletionProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>>;
}

/// Blanket implementation: any `CompletionProvider` automatically implements `CompletionProviderDyn`.
impl<T: CompletionProvider> CompletionProviderDyn for T {
    fn name(&self) -> &str {
        CompletionProvider::name(self)
    }

    fn model(&self) -> &str {
        CompletionProvider::model(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>> {
        Box::pin(self.complete(prompt))
    }
}

/// Type-erased completion provider for runtime backend selection.
///
/// Since `CompletionProvider` uses RPITIT, it cannot be used as a trait
/// object directly. `BoxCompletionProvider` delegates to the inner
/// `CompletionProviderDyn` trait object.
pub struct BoxCompletionProvider {
    inner: Box<dyn CompletionProviderDyn + Send + Sync>,
}

impl BoxCompletionProvider {
    /// Wrap a concrete `CompletionProvider` in a type-erased box.
    pub fn new<T: CompletionProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }
}

impl CompletionProvider for BoxCompletionProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send {
        async move { self.inner.complete_boxed(prompt).await }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxCompletionProvider, CompletionProvider, ProviderError};
    use crate::llm::testing::ScriptedProvider;

    #[tokio::test]
    async fn test_box_provider_delegates() {
        let boxed = BoxCompletionProvider::new(ScriptedProvider::new(vec![Ok(
            "hello".to_string(),
        )]));
        assert_eq!(boxed.name(), "scripted");
        assert_eq!(boxed.model(), "scripted-model");
        assert_eq!(boxed.complete("hi").await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_box_provider_propagates_errors() {
        let boxed = BoxCompletionProvider::new(ScriptedProvider::new(vec![Err(
            ProviderError::Status {
                status: 500,
                body: "boom".to_string(),
            },
        )]));
        let err = boxed.complete("hi").await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::Status {
                status: 500,
                body: "boom".to_string()
            }
        );
    }
}
