//! Business logic and trait definitions for DishCart.
//!
//! This crate defines the "ports" (completion provider and session
//! repository traits) that the infrastructure layer implements, plus the
//! classify-then-dispatch loop and the cart state machine built on them.
//! It depends only on `dishcart-types` -- never on `dishcart-infra` or any
//! HTTP/filesystem crate.

pub mod agent;
pub mod cart;
pub mod chat;
pub mod intent;
pub mod llm;
pub mod random;
pub mod storage;
pub mod tools;
