//! Reply texts shown to the user.
//!
//! Every handler outcome, including failures, ends up as one of these
//! strings; nothing here returns an error.

use dishcart_types::cart::{Cart, CartItem, CheckoutOutcome};
use dishcart_types::llm::ProviderError;

/// Formats cart replies with the configured currency symbol.
#[derive(Debug, Clone)]
pub struct Replies {
    currency_symbol: String,
}

impl Replies {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// `{sym}{amount}`, e.g. `₹120`.
    pub fn money(&self, amount: impl std::fmt::Display) -> String {
        format!("{}{amount}", self.currency_symbol)
    }

    pub fn added(&self, item: &CartItem) -> String {
        format!(
            "✅ Added **{}** ({}) to your cart.\n\nWould you like to view your cart, remove something, or checkout?",
            item.name,
            self.money(item.price)
        )
    }

    pub fn cart(&self, cart: &Cart) -> String {
        if cart.is_empty() {
            return "🛒 Your cart is empty.".to_string();
        }
        let mut msg = String::from("🛒 **Your Cart:**\n");
        for (i, item) in cart.items().iter().enumerate() {
            msg.push_str(&format!("{}. {} – {}\n", i + 1, item.name, self.money(item.price)));
        }
        msg.push_str(&format!("\n**Total:** {}\n", self.money(cart.total())));
        msg.push_str("Would you like to remove an item or checkout?");
        msg
    }

    pub fn removed(&self, item: &CartItem) -> String {
        format!("✅ Removed **{}** from your cart.", item.name)
    }

    pub fn not_found(&self, query: &str) -> String {
        format!("⚠️ Could not find **{query}** in your cart.")
    }

    pub fn remove_query_required(&self) -> String {
        "⚠️ Enter an item name to remove.".to_string()
    }

    pub fn checkout(&self, outcome: &CheckoutOutcome) -> String {
        match outcome {
            CheckoutOutcome::Empty => "Your cart is empty. Add something before checkout!".to_string(),
            CheckoutOutcome::Placed { total, .. } => format!(
                "✅ Order placed! Total amount: {}. Thank you for shopping!",
                self.money(total)
            ),
        }
    }

    pub fn cleared(&self) -> String {
        "🗑️ Your cart has been cleared.".to_string()
    }

    pub fn storage_failure(&self) -> String {
        "⚠️ Could not update your cart right now.".to_string()
    }
}

impl Default for Replies {
    fn default() -> Self {
        Self::new("₹")
    }
}

/// Apology shown when a handler's provider call fails.
pub fn provider_failure(err: &ProviderError) -> String {
    format!("⚠️ Sorry, I couldn't get an answer right now ({}).", err.display_summary())
}

/// Message for a turn aborted because classification failed.
pub fn classification_failure(err: &ProviderError) -> String {
    format!(
        "⚠️ Sorry, I couldn't process your message right now ({}). Please try again.",
        err.display_summary()
    )
}
