//! Chat turn and transcript types for DishCart.
//!
//! A turn produces a [`DispatchResult`]. The transcript is a display-only,
//! append-only record of the conversation; it is never fed back to the model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Intent label reported for a turn that never reached a handler.
pub const ABORTED_INTENT_LABEL: &str = "error";

/// The value returned to callers for every processed message.
///
/// `intent` always serializes as a string: the routed label, or
/// [`ABORTED_INTENT_LABEL`] for an aborted turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    pub assistant_message: String,
    /// Routed intent. `None` when the turn was aborted because the message
    /// could not be classified (provider failure).
    #[serde(with = "intent_label")]
    pub intent: Option<Intent>,
    pub user_message: String,
}

impl DispatchResult {
    /// Intent label for display, [`ABORTED_INTENT_LABEL`] for aborted turns.
    pub fn intent_label(&self) -> &'static str {
        self.intent
            .map(|intent| intent.label())
            .unwrap_or(ABORTED_INTENT_LABEL)
    }
}

mod intent_label {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ABORTED_INTENT_LABEL;
    use crate::intent::Intent;

    pub fn serialize<S: Serializer>(intent: &Option<Intent>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(intent.map(|i| i.label()).unwrap_or(ABORTED_INTENT_LABEL))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Intent>, D::Error> {
        let label = String::deserialize(deserializer)?;
        if label == ABORTED_INTENT_LABEL {
            return Ok(None);
        }
        label.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One line of the display transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: MessageRole,
    pub content: String,
    pub at: DateTime<Utc>,
}
