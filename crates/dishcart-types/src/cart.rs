//! Cart types for DishCart.
//!
//! A cart is an ordered list of line items owned by a single user. The
//! session map ties user identifiers to their carts and is the unit that
//! gets persisted as a whole.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single line item in a cart.
///
/// `price` is expressed in the smallest currency unit. Items are never
/// edited after creation; removal matches on the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: u32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Case-insensitive substring match against the item name.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Ordered sequence of items belonging to one user.
///
/// Insertion order is display order. Identical items are kept as separate
/// entries. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item prices.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price)).sum()
    }

    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove and return the first item whose name contains `query`
    /// (case-insensitive). Later matches are left in place.
    pub fn remove_first_match(&mut self, query: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.matches(query))?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

/// Whole-store mapping from user identifier to cart.
///
/// On disk: `{ "<user_id>": [ { "name": ..., "price": ... }, ... ], ... }`.
pub type SessionMap = BTreeMap<String, Cart>;

/// Result of checking out a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Nothing to check out; the store was not touched.
    Empty,
    /// The cart was emptied and this total charged.
    Placed { total: u64, item_count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_of(names: &[(&str, u32)]) -> Cart {
        names
            .iter()
            .map(|(name, price)| CartItem::new(*name, *price))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_total_sums_prices() {
        let cart = cart_of(&[("rice", 100), ("dal", 90), ("ghee", 150)]);
        assert_eq!(cart.total(), 340);
        assert_eq!(Cart::new().total(), 0);
    }

    #[test]
    fn test_remove_first_match_is_case_insensitive() {
        let mut cart = cart_of(&[("Basmati RICE", 120), ("salt", 80)]);
        let removed = cart.remove_first_match("rice").unwrap();
        assert_eq!(removed.name, "Basmati RICE");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_first_match_prefers_insertion_order() {
        let mut cart = cart_of(&[("brown rice", 100), ("rice flour", 110)]);
        let removed = cart.remove_first_match("rice").unwrap();
        assert_eq!(removed.name, "brown rice");
        assert_eq!(cart.items()[0].name, "rice flour");
    }

    #[test]
    fn test_remove_first_match_miss_leaves_cart_unchanged() {
        let mut cart = cart_of(&[("rice", 100)]);
        let before = cart.clone();
        assert!(cart.remove_first_match("banana").is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_session_map_json_shape() {
        let mut map = SessionMap::new();
        map.insert("alice".to_string(), cart_of(&[("rice", 99)]));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "alice": [ { "name": "rice", "price": 99 } ] }));
    }

    #[test]
    fn test_checkout_outcome_serde_tag() {
        let json = serde_json::to_value(CheckoutOutcome::Placed {
            total: 200,
            item_count: 2,
        })
        .unwrap();
        assert_eq!(json["status"], "placed");
        assert_eq!(json["total"], 200);
    }
}
