//! Fixed prompt templates sent to the completion provider.
//!
//! Prompts are rebuilt for every call; nothing from earlier turns is
//! included.

use dishcart_types::intent::Intent;

/// Classification prompt listing every tool label, one bulleted line each.
pub fn classification_prompt(message: &str) -> String {
    let labels = Intent::TOOL_INTENTS
        .iter()
        .map(|intent| format!("- {}", intent.label()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Classify this user message into one of:\n{labels}\n\nONLY return the keyword, nothing else.\n\nUser message: {message}"
    )
}

pub fn recipe_prompt(query: &str) -> String {
    format!(
        "You are a cooking assistant. User wants a recipe for:\n\n{query}\n\nProvide:\n- Confirmed recipe name\n- Bullet list of ingredients with quantities"
    )
}

pub fn chitchat_prompt(message: &str) -> String {
    format!("You are a helpful cooking assistant. User said: {message}\nReply politely.")
}
