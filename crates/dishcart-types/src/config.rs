//! Global configuration types for DishCart.
//!
//! `GlobalConfig` represents the top-level `config.toml` in the data
//! directory. Every field has a default so an empty or missing file works.

use serde::{Deserialize, Serialize};

use crate::llm::ProviderKind;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Session file name, relative to the data directory.
    #[serde(default = "default_session_file")]
    pub session_file: String,

    #[serde(default)]
    pub provider: ProviderSettings,

    #[serde(default)]
    pub cart: CartSettings,
}

fn default_session_file() -> String {
    "sessions.json".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
            provider: ProviderSettings::default(),
            cart: CartSettings::default(),
        }
    }
}

/// Completion backend settings.
///
/// Timeout and retry are explicit knobs: the provider call has no built-in
/// retry, and `max_retries = 0` keeps single-attempt behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_provider_kind")]
    pub kind: ProviderKind,

    /// Model identifier; the backend default when unset.
    #[serde(default)]
    pub model: Option<String>,

    /// Override the backend's default endpoint.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Upper bound for one HTTP call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts made by callers on transient failures.
    #[serde(default)]
    pub max_retries: u32,

    /// Delay before retry `n` is `n * retry_backoff_ms`.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_provider_kind() -> ProviderKind {
    ProviderKind::Gemini
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_retry_backoff_ms() -> u64 {
    500
}

impl ProviderSettings {
    pub fn resolved_model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.kind.default_model().to_string())
    }

    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.kind.default_base_url().to_string())
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            model: None,
            base_url: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// Cart pricing and display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSettings {
    /// Lowest random price (inclusive).
    #[serde(default = "default_min_price")]
    pub min_price: u32,

    /// Highest random price (inclusive).
    #[serde(default = "default_max_price")]
    pub max_price: u32,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_min_price() -> u32 {
    80
}

fn default_max_price() -> u32 {
    150
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl CartSettings {
    pub fn has_valid_price_range(&self) -> bool {
        self.min_price <= self.max_price
    }
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            max_price: default_max_price(),
            currency_symbol: default_currency_symbol(),
        }
    }
}
