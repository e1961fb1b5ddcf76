//! Infrastructure layer for DishCart.
//!
//! Contains implementations of the traits defined in `dishcart-core`:
//! Gemini and Ollama completion backends, JSON-file and in-memory session
//! repositories, plus config loading and data directory resolution.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod storage;
