//! In-memory repository shared by the crate's unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dishcart_types::cart::SessionMap;
use dishcart_types::error::RepositoryError;

use super::session_repository::SessionRepository;

/// Counts saves, keeps the last saved map, and can be told to fail saves.
#[derive(Default)]
pub(crate) struct RecordingRepository {
    initial: SessionMap,
    saved: Mutex<Option<SessionMap>>,
    pub(crate) saves: AtomicUsize,
    failing: AtomicBool,
}

impl RecordingRepository {
    pub(crate) fn with(initial: SessionMap) -> Self {
        Self {
            initial,
            ..Default::default()
        }
    }

    pub(crate) fn last_saved(&self) -> Option<SessionMap> {
        self.saved.lock().unwrap().clone()
    }

    pub(crate) fn fail_saves(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl SessionRepository for RecordingRepository {
    async fn load(&self) -> Result<SessionMap, RepositoryError> {
        Ok(self.initial.clone())
    }

    async fn save(&self, sessions: &SessionMap) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io("disk full".to_string()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.saved.lock().unwrap() = Some(sessions.clone());
        Ok(())
    }
}
