//! Direct cart subcommands (view, checkout, clear, remove).
//!
//! These bypass intent classification, so no provider call is made.

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use console::style;

use dishcart_core::cart::CartStore;

use crate::state::AppState;

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show a user's cart.
    View {
        /// User identifier.
        user: String,
    },

    /// Place the order and empty the cart.
    Checkout {
        /// User identifier.
        user: String,
    },

    /// Empty the cart without ordering.
    Clear {
        /// User identifier.
        user: String,
    },

    /// Remove the first item whose name contains QUERY.
    Remove {
        /// User identifier.
        user: String,

        /// Case-insensitive part of the item name.
        query: String,
    },
}

/// Handle a cart subcommand.
pub async fn handle_cart_command(cmd: CartCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        CartCommand::View { user } => view_cart(state, &user, json).await,
        CartCommand::Checkout { user } => {
            let reply = state.orchestrator.checkout(&user).await;
            print_reply(&user, &reply, json)
        }
        CartCommand::Clear { user } => {
            let reply = state.orchestrator.clear_cart(&user).await;
            print_reply(&user, &reply, json)
        }
        CartCommand::Remove { user, query } => {
            let reply = state.orchestrator.remove_from_cart(&user, &query).await;
            print_reply(&user, &reply, json)
        }
    }
}

async fn view_cart(state: &AppState, user: &str, json: bool) -> Result<()> {
    let cart = state.orchestrator.store().view(user).await;
    let replies = state.orchestrator.replies();

    if json {
        let body = serde_json::json!({
            "user_id": user,
            "items": cart.items(),
            "total": cart.total(),
            "message": replies.cart(&cart),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if cart.is_empty() {
        println!();
        println!("  {} {}'s cart is empty.", style("🛒").bold(), style(user).cyan());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Item").fg(Color::Cyan),
            Cell::new("Price").fg(Color::Cyan),
        ]);

    for (i, item) in cart.items().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&item.name),
            Cell::new(replies.money(item.price)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Total").fg(Color::Green),
        Cell::new(replies.money(cart.total()))
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right),
    ]);

    println!();
    println!("  {} Cart for {}", style("🛒").bold(), style(user).cyan().bold());
    println!();
    println!("{table}");
    println!();
    Ok(())
}

fn print_reply(user: &str, reply: &str, json: bool) -> Result<()> {
    if json {
        let body = serde_json::json!({ "user_id": user, "message": reply });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!();
        println!("  {reply}");
        println!();
    }
    Ok(())
}
