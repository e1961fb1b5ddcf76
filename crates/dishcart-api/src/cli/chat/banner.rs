//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(user: &str, provider: &str, model: &str) {
    println!();
    println!(
        "  {} {}",
        "🍳",
        style("DishCart - Recipe & Shopping Assistant").cyan().bold()
    );
    println!();
    println!("  {}     {}", style("User:").bold(), style(user).green());
    println!(
        "  {}    {}",
        style("Model:").bold(),
        style(format!("{provider} / {model}")).dim()
    );
    println!();
    println!(
        "  {}",
        style("Ask for a recipe, look up an ingredient, or manage your cart.").dim()
    );
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
