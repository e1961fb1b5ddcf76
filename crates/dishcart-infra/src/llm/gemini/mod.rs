//! Google Gemini backend (single-shot `generateContent`).

pub mod client;
pub mod types;

pub use client::GeminiProvider;
