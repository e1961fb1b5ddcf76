//! `dishcart status`: configuration and storage at a glance.

use anyhow::Result;
use console::style;

use dishcart_core::llm::provider::CompletionProvider;

use crate::state::AppState;

pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let provider = state.orchestrator.provider();
    let users = state.orchestrator.store().user_count().await;
    let cart = &state.config.cart;

    if json {
        let body = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "sessions": state.session_location,
            "users": users,
            "provider": provider.name(),
            "model": provider.model(),
            "timeout_secs": state.config.provider.timeout_secs,
            "max_retries": state.config.provider.max_retries,
            "price_range": [cart.min_price, cart.max_price],
            "currency_symbol": cart.currency_symbol,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let row = |label: &str, value: String| {
        println!("  {:<12} {}", style(label).bold(), value);
    };

    println!();
    println!("  {} {}", style("🍳").bold(), style("DishCart").cyan().bold());
    println!();
    row("Version", env!("CARGO_PKG_VERSION").to_string());
    row("Data dir", state.data_dir.display().to_string());
    row("Sessions", format!("{} ({users} users)", state.session_location));
    row("Provider", format!("{} / {}", provider.name(), provider.model()));
    row(
        "Timeout",
        format!(
            "{}s, {} retries",
            state.config.provider.timeout_secs, state.config.provider.max_retries
        ),
    );
    row(
        "Prices",
        format!(
            "{sym}{} – {sym}{}",
            cart.min_price,
            cart.max_price,
            sym = cart.currency_symbol
        ),
    );
    println!();
    Ok(())
}
