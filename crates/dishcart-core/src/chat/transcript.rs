//! Append-only conversation transcript.
//!
//! Held in memory for the life of a session and only used for display; it
//! is never sent to the model.

use chrono::Utc;

use dishcart_types::chat::{DispatchResult, MessageRole, TranscriptEntry};

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(MessageRole::User, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(MessageRole::Assistant, content.into());
    }

    /// Append the user message and the reply of a processed turn.
    pub fn record_turn(&mut self, result: &DispatchResult) {
        self.push_user(result.user_message.clone());
        self.push_assistant(result.assistant_message.clone());
    }

    /// Entries grouped in consecutive pairs, most recent pair first.
    ///
    /// Direct cart actions only append an assistant entry, so a pair is not
    /// guaranteed to be a user/assistant exchange; a trailing odd entry forms
    /// its own group.
    pub fn exchanges_newest_first(&self) -> Vec<&[TranscriptEntry]> {
        self.entries.chunks(2).rev().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn push(&mut self, role: MessageRole, content: String) {
        self.entries.push(TranscriptEntry {
            role,
            content,
            at: Utc::now(),
        });
    }
}
