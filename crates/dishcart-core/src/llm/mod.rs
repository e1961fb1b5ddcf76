//! Completion provider abstractions for DishCart.
//!
//! - `CompletionProvider`: RPITIT trait for concrete backends
//! - `BoxCompletionProvider`: object-safe wrapper for runtime backend selection
//! - `retry`: caller-side retry policy (providers never retry on their own)

pub mod box_provider;
pub mod provider;
pub mod retry;

#[cfg(test)]
pub(crate) mod testing;
