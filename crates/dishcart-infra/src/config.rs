//! Global configuration loader for DishCart.
//!
//! Reads `config.toml` from the data directory (`~/.dishcart/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::Path;

use dishcart_types::config::{CartSettings, GlobalConfig, ProviderSettings};

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - An inverted price range is replaced by the default range, with a warning.
/// - A zero `timeout_secs` is replaced by the default timeout, with a warning.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    let mut config = match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            return GlobalConfig::default();
        }
    };

    if !config.cart.has_valid_price_range() {
        let defaults = CartSettings::default();
        tracing::warn!(
            min_price = config.cart.min_price,
            max_price = config.cart.max_price,
            "Invalid price range in {}, using {}..={}",
            config_path.display(),
            defaults.min_price,
            defaults.max_price
        );
        config.cart.min_price = defaults.min_price;
        config.cart.max_price = defaults.max_price;
    }

    if config.provider.timeout_secs == 0 {
        let default_timeout = ProviderSettings::default().timeout_secs;
        tracing::warn!(
            "timeout_secs = 0 in {} would fail every provider call, using {default_timeout}",
            config_path.display()
        );
        config.provider.timeout_secs = default_timeout;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishcart_types::llm::ProviderKind;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.session_file, "sessions.json");
        assert_eq!(config.provider.kind, ProviderKind::Gemini);
        assert_eq!(config.cart.min_price, 80);
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
session_file = "carts.json"

[provider]
kind = "ollama"
base_url = "http://gpu-box:11434"
timeout_secs = 20

[cart]
currency_symbol = "Rs. "
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.session_file, "carts.json");
        assert_eq!(config.provider.kind, ProviderKind::Ollama);
        assert_eq!(config.provider.resolved_base_url(), "http://gpu-box:11434");
        assert_eq!(config.provider.timeout_secs, 20);
        assert_eq!(config.cart.currency_symbol, "Rs. ");
        assert_eq!(config.cart.max_price, 150);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.session_file, "sessions.json");
        assert_eq!(config.provider.max_retries, 0);
    }

    #[tokio::test]
    async fn load_global_config_inverted_price_range_falls_back() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            "[cart]\nmin_price = 300\nmax_price = 100\ncurrency_symbol = \"$\"\n",
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.cart.min_price, 80);
        assert_eq!(config.cart.max_price, 150);
        assert_eq!(config.cart.currency_symbol, "$");
    }

    #[tokio::test]
    async fn load_global_config_zero_timeout_falls_back() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            "[provider]\nkind = \"ollama\"\ntimeout_secs = 0\nmax_retries = 1\n",
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.provider.timeout_secs, 60);
        assert_eq!(config.provider.kind, ProviderKind::Ollama);
        assert_eq!(config.provider.max_retries, 1);
    }
}
