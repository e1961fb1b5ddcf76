//! One-shot message: classify, dispatch, print.

use anyhow::{Result, bail};
use console::style;

use crate::cli::chat::renderer::ChatRenderer;
use crate::state::AppState;

pub async fn send_message(state: &AppState, user: &str, message: &str, json: bool) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Message must not be empty");
    }

    let result = state.orchestrator.handle_message(user, message).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let renderer = ChatRenderer::new();
    println!();
    println!(
        "  {} {}",
        style("Intent:").bold(),
        style(result.intent_label()).dim()
    );
    println!();
    print!("{}", renderer.render(&result.assistant_message));
    println!();
    Ok(())
}
