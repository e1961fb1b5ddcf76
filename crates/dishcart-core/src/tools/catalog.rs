//! Synthetic product listing for ingredient queries.
//!
//! There is no real catalog behind this: every query yields a fresh set of
//! offers with random brand, price and store.

use std::sync::Arc;

use dishcart_types::catalog::{
    BRANDS, OFFERS_PER_QUERY, PACK_QUANTITY, PLACEHOLDER_LINK, ProductOffer, STORES,
};

use crate::random::Randomizer;
use crate::tools::replies::Replies;

pub struct ProductCatalog {
    randomizer: Arc<Randomizer>,
}

impl ProductCatalog {
    pub fn new(randomizer: Arc<Randomizer>) -> Self {
        Self { randomizer }
    }

    /// Draw `OFFERS_PER_QUERY` independent offers for `query`.
    pub fn offers(&self, query: &str) -> Vec<ProductOffer> {
        (0..OFFERS_PER_QUERY)
            .map(|_| ProductOffer {
                ingredient: query.to_string(),
                brand: self.randomizer.choose(&BRANDS).to_string(),
                quantity: PACK_QUANTITY.to_string(),
                price: self.randomizer.price(),
                store: self.randomizer.choose(&STORES).to_string(),
                link: PLACEHOLDER_LINK.to_string(),
            })
            .collect()
    }

    pub fn listing(&self, query: &str, replies: &Replies) -> String {
        format_listing(query, &self.offers(query), replies)
    }
}

pub fn format_listing(query: &str, offers: &[ProductOffer], replies: &Replies) -> String {
    let mut msg = format!("Here are some options for **{query}**:\n\n");
    for offer in offers {
        msg.push_str(&format!(
            "✅ {} {} {} – {} – {} – [Link]({})\n",
            offer.brand,
            offer.ingredient,
            offer.quantity,
            replies.money(offer.price),
            offer.store,
            offer.link
        ));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_draw_from_fixed_sets() {
        let catalog = ProductCatalog::new(Arc::new(Randomizer::seeded(80..=150, 5)));
        let offers = catalog.offers("rice");

        assert_eq!(offers.len(), OFFERS_PER_QUERY);
        for offer in &offers {
            assert_eq!(offer.ingredient, "rice");
            assert!(BRANDS.contains(&offer.brand.as_str()));
            assert!(STORES.contains(&offer.store.as_str()));
            assert!((80..=150).contains(&offer.price));
            assert_eq!(offer.quantity, "1kg");
            assert_eq!(offer.link, "http://example.com/product");
        }
    }

    #[test]
    fn test_format_listing() {
        let offer = ProductOffer {
            ingredient: "toor dal".to_string(),
            brand: "Daawat".to_string(),
            quantity: "1kg".to_string(),
            price: 120,
            store: "Amazon".to_string(),
            link: "http://example.com/product".to_string(),
        };
        let text = format_listing("toor dal", &[offer], &Replies::default());
        assert_eq!(
            text,
            "Here are some options for **toor dal**:\n\n✅ Daawat toor dal 1kg – ₹120 – Amazon – [Link](http://example.com/product)\n"
        );
    }

    #[test]
    fn test_listing_has_one_line_per_offer() {
        let catalog = ProductCatalog::new(Arc::new(Randomizer::seeded(80..=150, 9)));
        let text = catalog.listing("sugar", &Replies::default());
        assert_eq!(text.lines().filter(|l| l.starts_with("✅ ")).count(), 3);
    }
}
