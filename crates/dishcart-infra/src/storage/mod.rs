//! Session repository implementations.
//!
//! - [`JsonFileSessionRepository`]: whole-file JSON, atomic replace on save
//! - [`MemorySessionRepository`]: process-local, nothing survives a restart

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileSessionRepository;
pub use memory::MemorySessionRepository;

use dishcart_core::storage::session_repository::SessionRepository;
use dishcart_types::cart::SessionMap;
use dishcart_types::error::RepositoryError;

/// Runtime choice between the file-backed and in-memory repositories.
#[derive(Debug)]
pub enum SessionBackend {
    File(JsonFileSessionRepository),
    Memory(MemorySessionRepository),
}

impl SessionBackend {
    /// Human-readable location for status output.
    pub fn describe(&self) -> String {
        match self {
            SessionBackend::File(repo) => repo.path().display().to_string(),
            SessionBackend::Memory(_) => "in-memory".to_string(),
        }
    }
}

impl SessionRepository for SessionBackend {
    async fn load(&self) -> Result<SessionMap, RepositoryError> {
        match self {
            SessionBackend::File(repo) => repo.load().await,
            SessionBackend::Memory(repo) => repo.load().await,
        }
    }

    async fn save(&self, sessions: &SessionMap) -> Result<(), RepositoryError> {
        match self {
            SessionBackend::File(repo) => repo.save(sessions).await,
            SessionBackend::Memory(repo) => repo.save(sessions).await,
        }
    }
}
