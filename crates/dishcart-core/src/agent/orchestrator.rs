//! Single entry point for a chat turn.
//!
//! A turn is classify -> dispatch -> respond. The classifier and every
//! handler share one provider; calls within a turn run strictly one after
//! another. Nothing is carried between turns except what the cart store
//! persists.

use std::sync::Arc;

use tracing::{info, warn};

use dishcart_types::chat::DispatchResult;

use crate::cart::store::CartStore;
use crate::intent::classifier::IntentClassifier;
use crate::llm::provider::CompletionProvider;
use crate::llm::retry::RetryPolicy;
use crate::random::Randomizer;
use crate::tools::catalog::ProductCatalog;
use crate::tools::dispatcher::ToolDispatcher;
use crate::tools::replies::{Replies, classification_failure};

/// Settings shared by the classifier and the handlers.
#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    pub retry: RetryPolicy,
    pub currency_symbol: String,
    /// Source of catalog prices and picks.
    pub randomizer: Arc<Randomizer>,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::none(),
            currency_symbol: "₹".to_string(),
            randomizer: Arc::new(Randomizer::default()),
        }
    }
}

pub struct Orchestrator<P: CompletionProvider, S: CartStore> {
    provider: Arc<P>,
    classifier: IntentClassifier<P>,
    dispatcher: ToolDispatcher<P, S>,
}

impl<P: CompletionProvider, S: CartStore> Orchestrator<P, S> {
    pub fn new(provider: Arc<P>, store: Arc<S>, options: OrchestratorOptions) -> Self {
        let classifier = IntentClassifier::new(provider.clone(), options.retry);
        let dispatcher = ToolDispatcher::new(
            provider.clone(),
            store,
            ProductCatalog::new(options.randomizer),
            Replies::new(options.currency_symbol),
            options.retry,
        );
        Self {
            provider,
            classifier,
            dispatcher,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn store(&self) -> &S {
        self.dispatcher.store()
    }

    pub fn replies(&self) -> &Replies {
        self.dispatcher.replies()
    }

    /// Process one user message.
    ///
    /// If classification fails the turn stops there: no handler runs and the
    /// result carries no intent.
    #[tracing::instrument(name = "handle_message", skip(self, message))]
    pub async fn handle_message(&self, user_id: &str, message: &str) -> DispatchResult {
        let classification = match self.classifier.classify(message).await {
            Ok(classification) => classification,
            Err(err) => {
                warn!(error = %err, "Classification failed, aborting turn");
                return DispatchResult {
                    assistant_message: classification_failure(&err),
                    intent: None,
                    user_message: message.to_string(),
                };
            }
        };

        let intent = classification.route();
        info!(%intent, "Predicted intent");

        let assistant_message = self.dispatcher.dispatch(intent, user_id, message).await;
        DispatchResult {
            assistant_message,
            intent: Some(intent),
            user_message: message.to_string(),
        }
    }

    // --- Direct cart operations (no classification) ---

    pub async fn view_cart(&self, user_id: &str) -> String {
        self.dispatcher.view_cart(user_id).await
    }

    pub async fn checkout(&self, user_id: &str) -> String {
        self.dispatcher.checkout(user_id).await
    }

    pub async fn clear_cart(&self, user_id: &str) -> String {
        self.dispatcher.clear_cart(user_id).await
    }

    /// Remove by name. A blank query is rejected without touching the store.
    pub async fn remove_from_cart(&self, user_id: &str, query: &str) -> String {
        let query = query.trim();
        if query.is_empty() {
            return self.replies().remove_query_required();
        }
        self.dispatcher.remove_from_cart(user_id, query).await
    }
}
