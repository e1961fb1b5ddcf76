//! CartStore trait definition.

use dishcart_types::cart::{Cart, CartItem, CheckoutOutcome};
use dishcart_types::error::CartError;

/// Per-user cart operations.
///
/// Every mutator persists the whole store before returning. Unknown users
/// behave as if they had an empty cart.
pub trait CartStore: Send + Sync {
    /// Append an item named `name` with a freshly drawn price.
    fn add(
        &self,
        user_id: &str,
        name: &str,
    ) -> impl std::future::Future<Output = Result<CartItem, CartError>> + Send;

    /// Snapshot of the user's cart. Never mutates.
    fn view(&self, user_id: &str) -> impl std::future::Future<Output = Cart> + Send;

    /// Remove the first item whose name contains `query` (case-insensitive).
    ///
    /// Returns `CartError::NotFound` and writes nothing when nothing matches.
    fn remove(
        &self,
        user_id: &str,
        query: &str,
    ) -> impl std::future::Future<Output = Result<CartItem, CartError>> + Send;

    /// Empty the cart and report the total. An empty cart is left untouched.
    fn checkout(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<CheckoutOutcome, CartError>> + Send;

    /// Empty the cart unconditionally. Idempotent.
    fn clear(&self, user_id: &str)
    -> impl std::future::Future<Output = Result<(), CartError>> + Send;
}
