//! Shared domain types for DishCart.
//!
//! This crate contains the core domain types used across the workspace:
//! carts, intents, provider errors, catalog offers, chat transcripts and
//! configuration, plus their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod intent;
pub mod llm;
