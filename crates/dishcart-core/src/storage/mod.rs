//! Storage abstractions for DishCart.
//!
//! Defines the whole-map session repository trait.
//! Implementations live in dishcart-infra.

pub mod session_repository;

#[cfg(test)]
pub(crate) mod testing;
