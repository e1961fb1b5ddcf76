//! HTTP/REST API layer for DishCart.
//!
//! Axum-based REST API at `/api/v1/` with an envelope response format and
//! CORS support. Exposes message handling and the direct cart operations.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
