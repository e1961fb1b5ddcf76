//! SessionRepository trait definition.

use dishcart_types::cart::SessionMap;
use dishcart_types::error::RepositoryError;

/// Persistence strategy for the user -> cart map.
///
/// The map is always loaded and saved as a whole; there are no partial
/// writes. Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in dishcart-infra (e.g., `JsonFileSessionRepository`).
pub trait SessionRepository: Send + Sync {
    /// Read the full map. A store that has never been written yields an empty map.
    fn load(&self) -> impl std::future::Future<Output = Result<SessionMap, RepositoryError>> + Send;

    /// Replace the persisted map with `sessions`.
    fn save(
        &self,
        sessions: &SessionMap,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
