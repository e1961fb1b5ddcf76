//! JSON file session repository.
//!
//! The whole user -> cart map lives in one pretty-printed JSON file:
//!
//! ```json
//! {
//!   "alice": [
//!     { "name": "add rice to cart", "price": 112 }
//!   ]
//! }
//! ```
//!
//! Saves write a temp file next to the target and rename it into place, so
//! readers never see a half-written file. Nothing coordinates separate
//! processes writing the same file; the last rename wins.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use dishcart_core::storage::session_repository::SessionRepository;
use dishcart_types::cart::SessionMap;
use dishcart_types::error::RepositoryError;

#[derive(Debug, Clone)]
pub struct JsonFileSessionRepository {
    path: PathBuf,
}

impl JsonFileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionRepository for JsonFileSessionRepository {
    async fn load(&self) -> Result<SessionMap, RepositoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session file yet, starting empty");
                return Ok(SessionMap::new());
            }
            Err(err) => {
                return Err(RepositoryError::Io(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(SessionMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            RepositoryError::Serialization(format!("invalid session file {}: {e}", self.path.display()))
        })
    }

    async fn save(&self, sessions: &SessionMap) -> Result<(), RepositoryError> {
        let json = serde_json::to_string_pretty(sessions)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, json.as_bytes()))
            .await
            .map_err(|e| RepositoryError::Io(format!("save task failed: {e}")))??;

        debug!(path = %self.path.display(), users = sessions.len(), "Saved sessions");
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), RepositoryError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .map_err(|e| RepositoryError::Io(format!("failed to create {}: {e}", dir.display())))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| RepositoryError::Io(format!("failed to create temp file: {e}")))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| RepositoryError::Io(format!("failed to write temp file: {e}")))?;
    tmp.persist(path)
        .map_err(|e| RepositoryError::Io(format!("failed to replace {}: {}", path.display(), e.error)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishcart_types::cart::{Cart, CartItem};
    use tempfile::TempDir;

    fn sample() -> SessionMap {
        let mut sessions = SessionMap::new();
        sessions.insert(
            "alice".to_string(),
            Cart::from(vec![CartItem::new("rice", 100), CartItem::new("dal", 90)]),
        );
        sessions.insert("bob".to_string(), Cart::new());
        sessions
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let repo = JsonFileSessionRepository::new(tmp.path().join("sessions.json"));
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let repo = JsonFileSessionRepository::new(tmp.path().join("sessions.json"));

        repo.save(&sample()).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), sample());
    }

    #[tokio::test]
    async fn test_file_schema() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sessions.json");
        let repo = JsonFileSessionRepository::new(&path);
        repo.save(&sample()).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "alice": [{"name": "rice", "price": 100}, {"name": "dal", "price": 90}],
                "bob": []
            })
        );
    }

    #[tokio::test]
    async fn test_reads_file_written_by_hand() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sessions.json");
        std::fs::write(&path, r#"{"guest": [{"name": "sugar", "price": 85}]}"#).unwrap();

        let sessions = JsonFileSessionRepository::new(&path).load().await.unwrap();
        assert_eq!(sessions["guest"].items(), &[CartItem::new("sugar", 85)]);
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs_and_leaves_no_temp_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let repo = JsonFileSessionRepository::new(dir.join("sessions.json"));

        repo.save(&sample()).await.unwrap();
        repo.save(&SessionMap::new()).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("sessions.json")]);
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sessions.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileSessionRepository::new(&path).load().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }
}
