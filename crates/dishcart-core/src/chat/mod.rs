//! In-memory display transcript for a chat session.

pub mod transcript;

pub use transcript::Transcript;
