//! Intent handlers and the dispatcher that routes to them.
//!
//! - `catalog`: synthetic product offers for ingredient queries
//! - `recipe` / `chitchat`: provider-backed text replies
//! - `replies`: user-facing reply texts
//! - `dispatcher`: intent -> handler transition table

pub mod catalog;
pub mod chitchat;
pub mod dispatcher;
pub mod recipe;
pub mod replies;

pub use dispatcher::ToolDispatcher;
