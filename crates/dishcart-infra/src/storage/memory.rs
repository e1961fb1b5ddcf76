//! Process-local session repository.

use std::sync::Mutex;

use dishcart_core::storage::session_repository::SessionRepository;
use dishcart_types::cart::SessionMap;
use dishcart_types::error::RepositoryError;

/// Keeps the last saved map in memory; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemorySessionRepository {
    sessions: Mutex<SessionMap>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionMap> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionRepository for MemorySessionRepository {
    async fn load(&self) -> Result<SessionMap, RepositoryError> {
        Ok(self.lock().clone())
    }

    async fn save(&self, sessions: &SessionMap) -> Result<(), RepositoryError> {
        *self.lock() = sessions.clone();
        Ok(())
    }
}
