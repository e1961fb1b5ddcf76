//! Interactive CLI chat experience for DishCart.
//!
//! Implements the chat loop: one classified turn per message, markdown
//! rendering of replies, slash commands standing in for the cart buttons,
//! and an in-memory history. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
