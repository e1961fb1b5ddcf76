//! Success envelope shared by every handler.
//!
//! ```json
//! { "data": { ... }, "meta": { "request_id": "...", "timestamp": "...", "response_time_ms": 5 } }
//! ```
//! Failures use the same `meta` block with `"data": null` and an `errors`
//! list; see [`crate::http::error::AppError`].

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    /// UUIDv7, so ids sort by arrival time.
    pub request_id: String,
    /// RFC 3339.
    pub timestamp: String,
    pub response_time_ms: u64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, request_id: String, response_time_ms: u64) -> Self {
        let meta = ApiMeta {
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            response_time_ms,
        };
        Self { data, meta }
    }
}
