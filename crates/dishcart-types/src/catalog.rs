//! Synthetic product offers returned for ingredient queries.

use serde::{Deserialize, Serialize};

/// Brands an offer can be drawn from.
pub const BRANDS: [&str; 3] = ["India Gate", "Daawat", "Organic Choice"];

/// Stores an offer can be drawn from.
pub const STORES: [&str; 3] = ["JioMart", "Amazon", "Flipkart"];

/// Every offer is sold in this pack size.
pub const PACK_QUANTITY: &str = "1kg";

/// Placeholder product link.
pub const PLACEHOLDER_LINK: &str = "http://example.com/product";

/// Number of offers produced per query.
pub const OFFERS_PER_QUERY: usize = 3;

/// One synthetic offer for an ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOffer {
    pub ingredient: String,
    pub brand: String,
    pub quantity: String,
    pub price: u32,
    pub store: String,
    pub link: String,
}
