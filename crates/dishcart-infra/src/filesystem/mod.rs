//! Data directory layout for DishCart.

use std::path::{Path, PathBuf};

use dishcart_types::config::GlobalConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `DISHCART_DATA_DIR` environment variable
/// 2. `~/.dishcart`
/// 3. `./.dishcart`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DISHCART_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".dishcart");
    }

    PathBuf::from(".dishcart")
}

/// Path of the session file. Absolute `session_file` values are used as-is.
pub fn session_file_path(data_dir: &Path, config: &GlobalConfig) -> PathBuf {
    data_dir.join(&config.session_file)
}
