//! Main chat loop orchestration.
//!
//! Each line the user types is either a slash command (cart actions, history,
//! user switching) or a chat message that goes through classify-then-dispatch.
//! The transcript lives for the duration of the loop only.

use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use dishcart_core::chat::Transcript;
use dishcart_core::llm::provider::CompletionProvider;
use dishcart_types::chat::MessageRole;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

fn prompt_for(user: &str) -> String {
    format!("{} {} ", style(user).green().bold(), style(">").dim())
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_assistant(renderer: &ChatRenderer, reply: &str) {
    println!();
    print!("{}", renderer.render(reply));
    println!();
}

fn print_history(transcript: &Transcript) {
    println!();
    if transcript.is_empty() {
        println!("  {}", style("No messages yet.").dim());
        println!();
        return;
    }
    for group in transcript.exchanges_newest_first() {
        for entry in group {
            let label = match entry.role {
                MessageRole::User => style("You").green().bold(),
                MessageRole::Assistant => style("Bot").cyan().bold(),
            };
            let preview = if entry.content.chars().count() > 100 {
                let cut: String = entry.content.chars().take(97).collect();
                format!("{cut}...")
            } else {
                entry.content.clone()
            };
            println!(
                "  {} {} {}",
                style(entry.at.format("%H:%M:%S")).dim(),
                label,
                preview
            );
        }
        println!("  {}", style("---").dim());
    }
    println!();
}

/// Run the interactive chat loop for `user`.
pub async fn run_chat_loop(state: &AppState, user: &str) -> anyhow::Result<()> {
    let orchestrator = &state.orchestrator;
    let renderer = ChatRenderer::new();
    let mut transcript = Transcript::new();
    let mut current_user = user.to_string();

    let provider = orchestrator.provider();
    print_welcome_banner(&current_user, provider.name(), provider.model());

    let (mut chat_input, _writer) = ChatInput::open(prompt_for(&current_user))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.next_event().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Line(text) => text,
        };
        if text.is_empty() {
            continue;
        }

        if let Some(cmd) = commands::parse(&text) {
            let reply = match cmd {
                ChatCommand::Help => {
                    commands::print_help();
                    continue;
                }
                ChatCommand::Clear => {
                    chat_input.clear_screen();
                    transcript.clear();
                    continue;
                }
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    break;
                }
                ChatCommand::History => {
                    print_history(&transcript);
                    continue;
                }
                ChatCommand::User(next) => {
                    info!(from = %current_user, to = %next, "Switching chat user");
                    current_user = next;
                    chat_input.set_prompt(&prompt_for(&current_user));
                    println!(
                        "\n  {} Now shopping as {}\n",
                        style("*").cyan().bold(),
                        style(&current_user).green()
                    );
                    continue;
                }
                ChatCommand::Unknown(cmd_name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(cmd_name).dim()
                    );
                    continue;
                }
                ChatCommand::Cart => orchestrator.view_cart(&current_user).await,
                ChatCommand::Checkout => orchestrator.checkout(&current_user).await,
                ChatCommand::ClearCart => orchestrator.clear_cart(&current_user).await,
                ChatCommand::Remove(item) => {
                    orchestrator.remove_from_cart(&current_user, &item).await
                }
            };
            transcript.push_assistant(reply.clone());
            print_assistant(&renderer, &reply);
            continue;
        }

        let spinner = thinking_spinner();
        let start_time = Instant::now();
        let result = orchestrator.handle_message(&current_user, &text).await;
        spinner.finish_and_clear();
        debug!(
            intent = result.intent_label(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Turn complete"
        );

        transcript.record_turn(&result);
        print_assistant(&renderer, &result.assistant_message);
    }

    Ok(())
}
