//! Ollama backend (streamed `/api/generate`).

pub mod client;
pub mod streaming;

pub use client::OllamaProvider;
