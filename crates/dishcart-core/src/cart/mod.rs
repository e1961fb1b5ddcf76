//! Per-user cart store.
//!
//! `CartStore` is the operation set the dispatcher and the direct cart
//! endpoints use; `CartService` implements it over any `SessionRepository`.

pub mod service;
pub mod store;

pub use service::CartService;
pub use store::CartStore;
