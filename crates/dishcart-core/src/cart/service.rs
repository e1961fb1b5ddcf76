//! Cart service backed by a whole-map session repository.
//!
//! The full user -> cart map is loaded once and kept in memory. Each
//! mutation is applied to a copy, the copy is saved, and only then does it
//! replace the in-memory map, so a failed write leaves memory and disk
//! agreeing. Mutations within one process are serialized by an async mutex;
//! separate processes sharing one file are not coordinated.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use dishcart_types::cart::{Cart, CartItem, CheckoutOutcome, SessionMap};
use dishcart_types::error::{CartError, RepositoryError};

use crate::cart::store::CartStore;
use crate::random::Randomizer;
use crate::storage::session_repository::SessionRepository;

/// Carts are keyed by the trimmed user id, whatever surface the id came from.
fn user_key(user_id: &str) -> &str {
    user_id.trim()
}

/// `CartStore` implementation over any `SessionRepository`.
///
/// Generic over the repository to maintain clean architecture
/// (dishcart-core never depends on dishcart-infra).
pub struct CartService<R: SessionRepository> {
    repository: R,
    sessions: Mutex<SessionMap>,
    randomizer: Arc<Randomizer>,
}

impl<R: SessionRepository> CartService<R> {
    /// Load the persisted map from `repository` and build the service.
    pub async fn load(repository: R, randomizer: Arc<Randomizer>) -> Result<Self, RepositoryError> {
        let sessions = repository.load().await?;
        debug!(users = sessions.len(), "Loaded cart sessions");
        Ok(Self {
            repository,
            sessions: Mutex::new(sessions),
            randomizer,
        })
    }

    /// Access the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Number of users with a cart entry (including emptied ones).
    pub async fn user_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Apply `mutate` to a copy of the map, persist it, then commit.
    ///
    /// `mutate` returning `Err` aborts before anything is written.
    async fn mutate<T>(
        &self,
        mutate: impl FnOnce(&mut SessionMap) -> Result<T, CartError>,
    ) -> Result<T, CartError> {
        let mut sessions = self.sessions.lock().await;
        let mut next = sessions.clone();
        let value = mutate(&mut next)?;
        self.repository.save(&next).await?;
        *sessions = next;
        Ok(value)
    }
}

impl<R: SessionRepository> CartStore for CartService<R> {
    async fn add(&self, user_id: &str, name: &str) -> Result<CartItem, CartError> {
        let user_id = user_key(user_id);
        let item = CartItem::new(name, self.randomizer.price());
        let added = self
            .mutate(|sessions| {
                sessions
                    .entry(user_id.to_string())
                    .or_default()
                    .push(item.clone());
                Ok(item)
            })
            .await?;
        info!(user_id, item = %added.name, price = added.price, "Added item to cart");
        Ok(added)
    }

    async fn view(&self, user_id: &str) -> Cart {
        let user_id = user_key(user_id);
        self.sessions
            .lock()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn remove(&self, user_id: &str, query: &str) -> Result<CartItem, CartError> {
        let user_id = user_key(user_id);
        let removed = self
            .mutate(|sessions| {
                sessions
                    .get_mut(user_id)
                    .and_then(|cart| cart.remove_first_match(query))
                    .ok_or_else(|| CartError::NotFound {
                        query: query.to_string(),
                    })
            })
            .await?;
        info!(user_id, item = %removed.name, "Removed item from cart");
        Ok(removed)
    }

    async fn checkout(&self, user_id: &str) -> Result<CheckoutOutcome, CartError> {
        let user_id = user_key(user_id);
        {
            let sessions = self.sessions.lock().await;
            if sessions.get(user_id).is_none_or(Cart::is_empty) {
                debug!(user_id, "Checkout requested on empty cart");
                return Ok(CheckoutOutcome::Empty);
            }
        }

        let outcome = self
            .mutate(|sessions| {
                let Some(cart) = sessions.get_mut(user_id).filter(|cart| !cart.is_empty()) else {
                    return Ok(CheckoutOutcome::Empty);
                };
                let outcome = CheckoutOutcome::Placed {
                    total: cart.total(),
                    item_count: cart.len(),
                };
                cart.clear();
                Ok(outcome)
            })
            .await?;
        if let CheckoutOutcome::Placed { total, item_count } = &outcome {
            info!(user_id, total, item_count, "Order placed");
        }
        Ok(outcome)
    }

    async fn clear(&self, user_id: &str) -> Result<(), CartError> {
        let user_id = user_key(user_id);
        self.mutate(|sessions| {
            sessions.entry(user_id.to_string()).or_default().clear();
            Ok(())
        })
        .await?;
        info!(user_id, "Cleared cart");
        Ok(())
    }
}
