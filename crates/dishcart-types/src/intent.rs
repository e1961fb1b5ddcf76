//! Intent labels and classification results.
//!
//! The classifier maps a message onto a closed set of tool intents. Anything
//! the model returns that is not an exact label match becomes
//! [`Classification::Unrecognized`] and is routed to the chitchat fallback.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which handler processes a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    RecipeRequest,
    IngredientQuery,
    AddToCart,
    ViewCart,
    RemoveFromCart,
    Checkout,
    ClearCart,
    /// Synthetic fallback; never produced by label matching.
    Chitchat,
}

impl Intent {
    /// The labels offered to the model, in prompt order.
    pub const TOOL_INTENTS: [Intent; 7] = [
        Intent::RecipeRequest,
        Intent::IngredientQuery,
        Intent::AddToCart,
        Intent::ViewCart,
        Intent::RemoveFromCart,
        Intent::Checkout,
        Intent::ClearCart,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::RecipeRequest => "recipe_request",
            Intent::IngredientQuery => "ingredient_query",
            Intent::AddToCart => "add_to_cart",
            Intent::ViewCart => "view_cart",
            Intent::RemoveFromCart => "remove_from_cart",
            Intent::Checkout => "checkout",
            Intent::ClearCart => "clear_cart",
            Intent::Chitchat => "chitchat",
        }
    }

    /// Exact match of an already-normalized label against the tool intents.
    ///
    /// `"chitchat"` is not a tool label and yields `None`.
    pub fn from_tool_label(label: &str) -> Option<Intent> {
        Self::TOOL_INTENTS
            .into_iter()
            .find(|intent| intent.label() == label)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chitchat" => Ok(Intent::Chitchat),
            other => Intent::from_tool_label(other)
                .ok_or_else(|| format!("invalid intent: '{other}'")),
        }
    }
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Recognized(Intent),
    /// The normalized model output matched no label.
    Unrecognized { raw: String },
}

impl Classification {
    /// The intent the orchestrator routes on; unrecognized output routes to chitchat.
    pub fn route(&self) -> Intent {
        match self {
            Classification::Recognized(intent) => *intent,
            Classification::Unrecognized { .. } => Intent::Chitchat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_roundtrip() {
        for intent in Intent::TOOL_INTENTS {
            let parsed: Intent = intent.to_string().parse().unwrap();
            assert_eq!(intent, parsed);
        }
        assert_eq!("chitchat".parse::<Intent>().unwrap(), Intent::Chitchat);
    }

    #[test]
    fn test_from_tool_label_is_exact() {
        assert_eq!(Intent::from_tool_label("add_to_cart"), Some(Intent::AddToCart));
        assert_eq!(Intent::from_tool_label("Add_To_Cart"), None);
        assert_eq!(Intent::from_tool_label(" add_to_cart"), None);
        assert_eq!(Intent::from_tool_label("add to cart"), None);
        assert_eq!(Intent::from_tool_label("chitchat"), None);
    }

    #[test]
    fn test_intent_serde() {
        let json = serde_json::to_string(&Intent::RemoveFromCart).unwrap();
        assert_eq!(json, "\"remove_from_cart\"");
    }

    #[test]
    fn test_unrecognized_routes_to_chitchat() {
        let c = Classification::Unrecognized {
            raw: "banana".to_string(),
        };
        assert_eq!(c.route(), Intent::Chitchat);
        assert_eq!(Classification::Recognized(Intent::Checkout).route(), Intent::Checkout);
    }
}
