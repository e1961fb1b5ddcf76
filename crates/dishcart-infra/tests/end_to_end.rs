//! Full turn against the JSON file repository with a scripted provider.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use dishcart_core::agent::{Orchestrator, OrchestratorOptions};
use dishcart_core::cart::{CartService, CartStore};
use dishcart_core::llm::provider::CompletionProvider;
use dishcart_core::random::Randomizer;
use dishcart_infra::storage::JsonFileSessionRepository;
use dishcart_types::intent::Intent;
use dishcart_types::llm::ProviderError;
use tempfile::TempDir;

struct ScriptedProvider {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedProvider {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
        }
    }
}

impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ProviderError::Transport("script exhausted".to_string()))
    }
}

async fn orchestrator(
    path: &std::path::Path,
    replies: &[&str],
) -> Orchestrator<ScriptedProvider, CartService<JsonFileSessionRepository>> {
    let randomizer = Arc::new(Randomizer::new(80..=150));
    let store = CartService::load(JsonFileSessionRepository::new(path), randomizer.clone())
        .await
        .unwrap();
    Orchestrator::new(
        Arc::new(ScriptedProvider::new(replies)),
        Arc::new(store),
        OrchestratorOptions {
            randomizer,
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn add_then_view_persists_single_item() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sessions.json");
    let orchestrator = orchestrator(&path, &["add_to_cart"]).await;

    let result = orchestrator.handle_message("alice", "add rice to cart").await;
    assert_eq!(result.intent, Some(Intent::AddToCart));

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let items = raw["alice"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "add rice to cart");
    let price = items[0]["price"].as_u64().unwrap();
    assert!((80..=150).contains(&price));

    let view = orchestrator.view_cart("alice").await;
    assert_eq!(
        view,
        format!(
            "🛒 **Your Cart:**\n1. add rice to cart – ₹{price}\n\n**Total:** ₹{price}\nWould you like to remove an item or checkout?"
        )
    );
}

#[tokio::test]
async fn carts_survive_restart() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sessions.json");

    {
        let orchestrator = orchestrator(&path, &["add_to_cart", "add_to_cart"]).await;
        orchestrator.handle_message("bob", "basmati rice").await;
        orchestrator.handle_message("bob", "toor dal").await;
    }

    let orchestrator = orchestrator(&path, &[]).await;
    let cart = orchestrator.store().view("bob").await;
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.items()[0].name, "basmati rice");

    let reply = orchestrator.checkout("bob").await;
    assert_eq!(
        reply,
        format!(
            "✅ Order placed! Total amount: ₹{}. Thank you for shopping!",
            cart.total()
        )
    );

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["bob"], serde_json::json!([]));
}

#[tokio::test]
async fn clear_twice_never_errors() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sessions.json");
    let orchestrator = orchestrator(&path, &[]).await;

    assert_eq!(orchestrator.clear_cart("carol").await, "🗑️ Your cart has been cleared.");
    assert_eq!(orchestrator.clear_cart("carol").await, "🗑️ Your cart has been cleared.");
    assert!(orchestrator.store().view("carol").await.is_empty());
}
