//! Slash command parsing and help for the chat loop.
//!
//! Commands start with `/`. The cart commands run the same operations as
//! `dishcart cart ...` and skip intent classification.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Show conversation history for this session, newest first.
    History,
    /// Show the current user's cart.
    Cart,
    /// Place the order.
    Checkout,
    /// Empty the cart.
    ClearCart,
    /// Remove an item by name.
    Remove(String),
    /// Switch to another user's cart.
    User(String),
    /// Unknown command or missing argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts
        .get(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/cart" => Some(ChatCommand::Cart),
        "/checkout" => Some(ChatCommand::Checkout),
        "/clearcart" => Some(ChatCommand::ClearCart),
        "/remove" | "/rm" => Some(match arg {
            Some(item) => ChatCommand::Remove(item),
            None => ChatCommand::Unknown("/remove requires an item name".to_string()),
        }),
        "/user" => Some(match arg {
            Some(user) => ChatCommand::User(user),
            None => ChatCommand::Unknown("/user requires a name".to_string()),
        }),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    let commands = [
        ("/help", "Show this help message"),
        ("/history", "Show conversation history"),
        ("/cart", "View your cart"),
        ("/checkout", "Place your order"),
        ("/clearcart", "Empty your cart"),
        ("/remove <item>", "Remove an item from your cart"),
        ("/user <name>", "Switch to another user's cart"),
        ("/clear", "Clear the screen"),
        ("/exit", "End the chat session"),
    ];

    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    for (name, description) in commands {
        println!("  {:<16} {}", style(name).cyan(), description);
    }
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_cart_commands() {
        assert_eq!(parse("/cart"), Some(ChatCommand::Cart));
        assert_eq!(parse("/CHECKOUT"), Some(ChatCommand::Checkout));
        assert_eq!(parse("/clearcart"), Some(ChatCommand::ClearCart));
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            parse("/remove  Basmati Rice "),
            Some(ChatCommand::Remove("Basmati Rice".to_string()))
        );
        assert_eq!(
            parse("/remove"),
            Some(ChatCommand::Unknown("/remove requires an item name".to_string()))
        );
        assert_eq!(
            parse("/remove   "),
            Some(ChatCommand::Unknown("/remove requires an item name".to_string()))
        );
    }

    #[test]
    fn test_parse_user() {
        assert_eq!(parse("/user alice"), Some(ChatCommand::User("alice".to_string())));
        assert!(matches!(parse("/user"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("add rice to cart"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
