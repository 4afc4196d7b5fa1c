use crate::analytics::domain::PackageMetadata;
use crate::shared::Result;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Snapshot of previously collected metadata
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMetadata {
    pub fetched_at: DateTime<Utc>,
    pub entries: BTreeMap<String, PackageMetadata>,
}

/// How old a cache snapshot may be before it must be refetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessPolicy {
    /// Never reuse the cache
    Bypass,
    /// Reuse snapshots younger than the given age
    MaxAge(Duration),
    /// Reuse any snapshot regardless of age
    Forever,
}

impl FreshnessPolicy {
    /// `None` means no limit and `Some(0)` disables the cache. Ages too
    /// large for a `Duration` are treated as no limit.
    pub fn from_hours(hours: Option<u64>) -> Self {
        match hours {
            None => FreshnessPolicy::Forever,
            Some(0) => FreshnessPolicy::Bypass,
            Some(h) => i64::try_from(h)
                .ok()
                .and_then(Duration::try_hours)
                .map_or(FreshnessPolicy::Forever, FreshnessPolicy::MaxAge),
        }
    }

    pub fn is_fresh(&self, fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            FreshnessPolicy::Bypass => false,
            FreshnessPolicy::MaxAge(max_age) => now.signed_duration_since(fetched_at) <= *max_age,
            FreshnessPolicy::Forever => true,
        }
    }
}

/// MetadataCache port for persisting collected formula metadata between runs
pub trait MetadataCache: Send + Sync {
    /// Loads the stored snapshot, `None` if nothing has been stored yet
    fn load(&self) -> Result<Option<CachedMetadata>>;

    /// Replaces the stored snapshot
    fn store(&self, snapshot: &CachedMetadata) -> Result<()>;
}
