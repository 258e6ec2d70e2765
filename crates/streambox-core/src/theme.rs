use streambox_models::ThemeMode;
use tracing::debug;
use crate::storage::{Storage, StorageError, THEME_KEY};

/// Persisted theme, if a valid one is stored
///
/// Anything other than `"light"` or `"dark"` is discarded from storage.
pub fn get_theme(storage: &Storage) -> Option<ThemeMode> {
    storage.get(THEME_KEY)
}

pub fn set_theme(storage: &Storage, mode: ThemeMode) -> Result<(), StorageError> {
    debug!("Persisting theme {}", mode);
    storage.save(THEME_KEY, &mode)
}
