use crate::{
    domain::{Grouping, Preferences, Sorting},
    error::Result,
};
use async_trait::async_trait;
use tracing::{debug, warn};

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStore;
pub use memory_storage::MemoryStore;
#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStore;

/// Persistent string key-value store for board preferences
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads a value, `None` when the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Reads both selector values, falling back to the defaults for keys that
/// are missing or unreadable
///
/// Stored values are not validated; anything unrecognized is carried
/// through as-is.
pub async fn load_preferences(store: &dyn PreferenceStore) -> Preferences {
    let grouping = match store.get(Grouping::STORAGE_KEY).await {
        Ok(Some(raw)) => Grouping::from(raw.as_str()),
        Ok(None) => Grouping::default(),
        Err(err) => {
            warn!(error = %err, "Failed to read grouping preference, using default");
            Grouping::default()
        }
    };

    let sorting = match store.get(Sorting::STORAGE_KEY).await {
        Ok(Some(raw)) => Sorting::from(raw.as_str()),
        Ok(None) => Sorting::default(),
        Err(err) => {
            warn!(error = %err, "Failed to read sorting preference, using default");
            Sorting::default()
        }
    };

    debug!(%grouping, %sorting, "Loaded preferences");
    Preferences::new(grouping, sorting)
}

/// Writes both selector values
pub async fn save_preferences(store: &dyn PreferenceStore, prefs: &Preferences) -> Result<()> {
    store
        .set(Grouping::STORAGE_KEY, prefs.grouping.as_str())
        .await?;
    store
        .set(Sorting::STORAGE_KEY, prefs.sorting.as_str())
        .await?;
    debug!(grouping = %prefs.grouping, sorting = %prefs.sorting, "Saved preferences");
    Ok(())
}
