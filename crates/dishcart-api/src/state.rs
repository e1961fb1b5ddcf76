//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! The orchestrator is generic over provider and cart store traits; AppState
//! pins it to the configured backend and the session repository.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use dishcart_core::agent::{Orchestrator, OrchestratorOptions};
use dishcart_core::cart::CartService;
use dishcart_core::llm::box_provider::BoxCompletionProvider;
use dishcart_core::llm::retry::RetryPolicy;
use dishcart_core::random::Randomizer;
use dishcart_infra::config::load_global_config;
use dishcart_infra::filesystem::{resolve_data_dir, session_file_path};
use dishcart_infra::llm::create_provider;
use dishcart_infra::storage::{JsonFileSessionRepository, MemorySessionRepository, SessionBackend};
use dishcart_types::config::GlobalConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteCartService = CartService<SessionBackend>;

pub type ConcreteOrchestrator = Orchestrator<BoxCompletionProvider, ConcreteCartService>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ConcreteOrchestrator>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
    /// Where carts are persisted, for status output.
    pub session_location: String,
}

impl AppState {
    /// Initialize the application state: load config, load carts, build the provider.
    ///
    /// With `ephemeral` set, carts live in memory only and the session file is
    /// neither read nor written.
    pub async fn init(ephemeral: bool) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        let config = load_global_config(&data_dir).await;

        let backend = if ephemeral {
            SessionBackend::Memory(MemorySessionRepository::new())
        } else {
            SessionBackend::File(JsonFileSessionRepository::new(session_file_path(
                &data_dir, &config,
            )))
        };
        let session_location = backend.describe();

        let randomizer = Arc::new(Randomizer::new(config.cart.min_price..=config.cart.max_price));
        let cart_service = CartService::load(backend, randomizer.clone())
            .await
            .with_context(|| format!("Failed to load carts from {session_location}"))?;

        let api_key = std::env::var(&config.provider.api_key_env).ok();
        let provider = create_provider(&config.provider, api_key.as_deref()).with_context(|| {
            format!(
                "Failed to set up the {} provider (is {} set?)",
                config.provider.kind, config.provider.api_key_env
            )
        })?;
        tracing::debug!(
            provider = %config.provider.kind,
            model = %config.provider.resolved_model(),
            "Completion provider ready"
        );

        let orchestrator = Orchestrator::new(
            Arc::new(provider),
            Arc::new(cart_service),
            OrchestratorOptions {
                retry: RetryPolicy::from_settings(&config.provider),
                currency_symbol: config.cart.currency_symbol.clone(),
                randomizer,
            },
        );

        Ok(Self {
            orchestrator: Arc::new(orchestrator),
            config: Arc::new(config),
            data_dir,
            session_location,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    use dishcart_core::llm::provider::CompletionProvider;
    use dishcart_types::llm::ProviderError;

    /// Answers every prompt with the same text.
    pub(crate) struct CannedProvider {
        reply: String,
    }

    impl CannedProvider {
        pub(crate) fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
            }
        }
    }

    impl CompletionProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-model"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            Ok(self.reply.clone())
        }
    }

    /// State over an in-memory session store and a provider that always
    /// replies `reply`.
    pub(crate) async fn in_memory_state(reply: &str) -> AppState {
        let config = GlobalConfig::default();
        let randomizer = Arc::new(Randomizer::seeded(100..=100, 7));
        let backend = SessionBackend::Memory(MemorySessionRepository::new());
        let session_location = backend.describe();
        let cart_service = CartService::load(backend, randomizer.clone())
            .await
            .unwrap();
        let orchestrator = Orchestrator::new(
            Arc::new(BoxCompletionProvider::new(CannedProvider::new(reply))),
            Arc::new(cart_service),
            OrchestratorOptions {
                retry: RetryPolicy::none(),
                currency_symbol: config.cart.currency_symbol.clone(),
                randomizer,
            },
        );
        AppState {
            orchestrator: Arc::new(orchestrator),
            config: Arc::new(config),
            data_dir: PathBuf::from("unused"),
            session_location,
        }
    }
}
