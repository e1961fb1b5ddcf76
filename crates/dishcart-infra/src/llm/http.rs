//! Shared HTTP plumbing for the completion backends.

use std::time::Duration;

use dishcart_types::llm::ProviderError;

/// Build a client whose requests are bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Transport(format!("failed to create HTTP client: {e}")))
}

/// Map a failed send or body read.
///
/// The URL is stripped first since it may carry an API key as a query
/// parameter.
pub fn request_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(err.without_url().to_string())
    }
}

/// Turn a non-success response into `ProviderError::Status` with its raw body.
pub async fn status_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ProviderError::Status { status, body }
}
