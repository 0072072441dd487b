use crate::{error::Result, storage::PreferenceStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::fs;

/// On-disk layout of `preferences.json`
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceDocument {
    #[serde(default)]
    values: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// File-based preference store
///
/// Keeps every key in a single JSON document inside the given directory.
pub struct FileStore {
    root_path: PathBuf,
}

impl FileStore {
    const PREFERENCES_FILE: &'static str = "preferences.json";

    /// Creates a new FileStore rooted at `dir`; the directory is created on
    /// first write
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: dir.as_ref().to_path_buf(),
        }
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.root_path.join(Self::PREFERENCES_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }

    async fn read_document(&self) -> Result<PreferenceDocument> {
        let file_path = self.preferences_file();

        if !file_path.exists() {
            return Ok(PreferenceDocument::default());
        }

        let contents = fs::read_to_string(&file_path).await?;
        let document: PreferenceDocument = serde_json::from_str(&contents)?;

        Ok(document)
    }
}

#[async_trait]
impl PreferenceStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let document = self.read_document().await?;
        Ok(document.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let mut document = self.read_document().await?;
        document.values.insert(key.to_string(), value.to_string());
        document.updated_at = Some(Utc::now());

        let json = serde_json::to_string_pretty(&document)?;
        fs::write(self.preferences_file(), json).await?;
        Ok(())
    }
}
