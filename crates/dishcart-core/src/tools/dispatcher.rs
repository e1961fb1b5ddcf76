//! Intent -> handler routing.
//!
//! Cart handlers are bound to the current user and receive the full user
//! message as the item name or removal query. Every handler returns display
//! text; store and provider failures are turned into messages here.

use std::sync::Arc;

use tracing::{debug, error};

use dishcart_types::error::CartError;
use dishcart_types::intent::Intent;

use crate::cart::store::CartStore;
use crate::llm::provider::CompletionProvider;
use crate::llm::retry::RetryPolicy;
use crate::tools::catalog::ProductCatalog;
use crate::tools::chitchat::chitchat_reply;
use crate::tools::recipe::recipe_reply;
use crate::tools::replies::Replies;

pub struct ToolDispatcher<P: CompletionProvider, S: CartStore> {
    provider: Arc<P>,
    store: Arc<S>,
    catalog: ProductCatalog,
    replies: Replies,
    retry: RetryPolicy,
}

impl<P: CompletionProvider, S: CartStore> ToolDispatcher<P, S> {
    pub fn new(
        provider: Arc<P>,
        store: Arc<S>,
        catalog: ProductCatalog,
        replies: Replies,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            provider,
            store,
            catalog,
            replies,
            retry,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn replies(&self) -> &Replies {
        &self.replies
    }

    /// Run the handler for `intent` and return its reply.
    pub async fn dispatch(&self, intent: Intent, user_id: &str, message: &str) -> String {
        debug!(%intent, user_id, "Dispatching");
        match intent {
            Intent::RecipeRequest => recipe_reply(self.provider.as_ref(), self.retry, message).await,
            Intent::IngredientQuery => self.catalog.listing(message, &self.replies),
            Intent::AddToCart => self.add_to_cart(user_id, message).await,
            Intent::ViewCart => self.view_cart(user_id).await,
            Intent::RemoveFromCart => self.remove_from_cart(user_id, message).await,
            Intent::Checkout => self.checkout(user_id).await,
            Intent::ClearCart => self.clear_cart(user_id).await,
            Intent::Chitchat => chitchat_reply(self.provider.as_ref(), self.retry, message).await,
        }
    }

    pub async fn add_to_cart(&self, user_id: &str, name: &str) -> String {
        match self.store.add(user_id, name).await {
            Ok(item) => self.replies.added(&item),
            Err(err) => self.cart_failure(user_id, name, err),
        }
    }

    pub async fn view_cart(&self, user_id: &str) -> String {
        self.replies.cart(&self.store.view(user_id).await)
    }

    pub async fn remove_from_cart(&self, user_id: &str, query: &str) -> String {
        match self.store.remove(user_id, query).await {
            Ok(item) => self.replies.removed(&item),
            Err(err) => self.cart_failure(user_id, query, err),
        }
    }

    pub async fn checkout(&self, user_id: &str) -> String {
        match self.store.checkout(user_id).await {
            Ok(outcome) => self.replies.checkout(&outcome),
            Err(err) => self.cart_failure(user_id, "", err),
        }
    }

    pub async fn clear_cart(&self, user_id: &str) -> String {
        match self.store.clear(user_id).await {
            Ok(()) => self.replies.cleared(),
            Err(err) => self.cart_failure(user_id, "", err),
        }
    }

    fn cart_failure(&self, user_id: &str, query: &str, err: CartError) -> String {
        match err {
            CartError::NotFound { .. } => self.replies.not_found(query),
            CartError::Repository(err) => {
                error!(user_id, error = %err, "Failed to persist cart");
                self.replies.storage_failure()
            }
        }
    }
}
