//! CLI command definitions and dispatch for the `dishcart` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod cart;
pub mod chat;
pub mod send;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use cart::CartCommand;

/// Recipe and grocery-cart chat assistant.
#[derive(Parser)]
#[command(name = "dishcart", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Keep carts in memory only; the session file is not read or written.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// User whose cart the session works on.
        #[arg(long, short, default_value = "guest", env = "DISHCART_USER")]
        user: String,
    },

    /// Send a single message and print the reply.
    Send {
        /// User identifier.
        user: String,

        /// The message text.
        message: String,
    },

    /// Cart operations that skip intent classification.
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    /// Show configuration and storage locations.
    Status,

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
