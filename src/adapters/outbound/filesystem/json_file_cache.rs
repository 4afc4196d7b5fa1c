use super::file_writer::write_atomically;
use crate::analytics::domain::PackageMetadata;
use crate::ports::outbound::{CachedMetadata, MetadataCache};
use crate::shared::error::AnalyticsError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default cache file name, created in the working directory
pub const DEFAULT_CACHE_FILE: &str = ".brew-analytics-cache.json";

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    fetched_at: DateTime<Utc>,
    #[serde(default)]
    entries: BTreeMap<String, PackageMetadata>,
}

/// JsonFileCache adapter persisting collected metadata as one JSON file
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn cache_error(&self, details: impl Into<String>) -> AnalyticsError {
        AnalyticsError::Cache {
            path: self.path.clone(),
            details: details.into(),
        }
    }
}

impl MetadataCache for JsonFileCache {
    fn load(&self) -> Result<Option<CachedMetadata>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no metadata cache file");
            return Ok(None);
        }

        let content = read_regular_file(&self.path, "metadata cache")
            .map_err(|e| self.cache_error(e.to_string()))?;
        let file: CacheFile =
            serde_json::from_str(&content).map_err(|e| self.cache_error(e.to_string()))?;

        Ok(Some(CachedMetadata {
            fetched_at: file.fetched_at,
            entries: file.entries,
        }))
    }

    fn store(&self, snapshot: &CachedMetadata) -> Result<()> {
        let file = CacheFile {
            fetched_at: snapshot.fetched_at,
            entries: snapshot.entries.clone(),
        };
        let json = serde_json::to_vec_pretty(&file).map_err(|e| self.cache_error(e.to_string()))?;
        write_atomically(&self.path, &json)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = snapshot.entries.len(),
            "metadata cache written"
        );
        Ok(())
    }
}
