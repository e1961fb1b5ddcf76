//! Completion provider types for DishCart.
//!
//! The core only needs "prompt in, text out"; these types describe which
//! backend to use and how a call can fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest slice of a raw error body carried into user-facing text.
const DISPLAY_BODY_LIMIT: usize = 200;

/// Errors from completion provider calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection refused, DNS failure, reset, ...
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("stream error: {0}")]
    Stream(String),

    #[error("authentication failed")]
    AuthenticationFailed,
}

impl ProviderError {
    /// Transient failures worth another attempt when the caller enables retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Transport(_) | ProviderError::Timeout => true,
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Short single-line description for chat output.
    ///
    /// Raw bodies can be large HTML or JSON pages; they are flattened and cut.
    pub fn display_summary(&self) -> String {
        let text = match self {
            ProviderError::Status { status, body } => {
                let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
                if flat.is_empty() {
                    format!("HTTP {status}")
                } else {
                    format!("HTTP {status} - {flat}")
                }
            }
            other => other.to_string(),
        };
        if text.chars().count() > DISPLAY_BODY_LIMIT {
            let cut: String = text.chars().take(DISPLAY_BODY_LIMIT).collect();
            format!("{cut}…")
        } else {
            text
        }
    }
}

/// Which completion backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Single-shot `generateContent` request.
    Gemini,
    /// Streamed newline-delimited JSON chunks from `/api/generate`.
    Ollama,
}

impl ProviderKind {
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-2.0-flash",
            ProviderKind::Ollama => "llama3.2:3b",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            ProviderKind::Ollama => "http://localhost:11434",
        }
    }

    pub fn requires_api_key(&self) -> bool {
        matches!(self, ProviderKind::Gemini)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Gemini => write!(f, "gemini"),
            ProviderKind::Ollama => write!(f, "ollama"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(format!("invalid provider kind: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_roundtrip() {
        for kind in [ProviderKind::Gemini, ProviderKind::Ollama] {
            let parsed: ProviderKind = kind.to_string().parse().unwrap();
            assert_eq!(kind, parsed);
        }
        assert!("bedrock".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_status_error_display_keeps_status_and_body() {
        let err = ProviderError::Status {
            status: 503,
            body: "upstream busy".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: upstream busy");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ProviderError::Timeout.is_retryable());
        assert!(ProviderError::Transport("refused".into()).is_retryable());
        assert!(ProviderError::Status { status: 429, body: String::new() }.is_retryable());
        assert!(ProviderError::Status { status: 500, body: String::new() }.is_retryable());
        assert!(!ProviderError::Status { status: 400, body: String::new() }.is_retryable());
        assert!(!ProviderError::AuthenticationFailed.is_retryable());
    }

    #[test]
    fn test_display_summary_flattens_and_truncates() {
        let err = ProviderError::Status {
            status: 500,
            body: "line one\n\n   line two".to_string(),
        };
        assert_eq!(err.display_summary(), "HTTP 500 - line one line two");

        let long = ProviderError::Status {
            status: 502,
            body: "x".repeat(1_000),
        };
        let summary = long.display_summary();
        assert!(summary.ends_with('…'));
        assert_eq!(summary.chars().count(), DISPLAY_BODY_LIMIT + 1);
    }
}
