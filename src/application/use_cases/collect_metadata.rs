use crate::analytics::domain::{MetadataCollection, MetadataOutcome, PackageMetadata};
use crate::ports::outbound::{
    CachedMetadata, FormulaMetadataRepository, FreshnessPolicy, MetadataCache, ProgressReporter,
};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::collections::{BTreeMap, BTreeSet};

/// Concurrency used when none is configured
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// CollectMetadataUseCase - best-effort metadata lookup for many formulas
///
/// Fetches run through a bounded `buffer_unordered` stream. A failed fetch
/// becomes `MetadataOutcome::Unavailable` for that name; the batch as a
/// whole never fails.
///
/// # Type Parameters
/// * `R` - FormulaMetadataRepository implementation
/// * `C` - MetadataCache implementation (optional)
/// * `P` - ProgressReporter implementation
pub struct CollectMetadataUseCase<R, C, P> {
    repository: R,
    cache: Option<C>,
    progress_reporter: P,
    concurrency: usize,
    policy: FreshnessPolicy,
}

impl<R, C, P> CollectMetadataUseCase<R, C, P>
where
    R: FormulaMetadataRepository,
    C: MetadataCache,
    P: ProgressReporter,
{
    pub fn new(
        repository: R,
        cache: Option<C>,
        progress_reporter: P,
        concurrency: usize,
        policy: FreshnessPolicy,
    ) -> Self {
        Self {
            repository,
            cache,
            progress_reporter,
            concurrency: concurrency.max(1),
            policy,
        }
    }

    /// Collects metadata for every unique name in `names`
    ///
    /// Fresh cache entries are reused unless `refresh` is set; only the
    /// remaining names are fetched. The merged result is written back to
    /// the cache. Cache failures are reported and otherwise ignored.
    pub async fn collect_all(&self, names: &[String], refresh: bool) -> MetadataCollection {
        let unique: BTreeSet<&str> = names.iter().map(String::as_str).collect();

        let cached = if refresh { None } else { self.load_fresh() };
        let (cached_at, cached_entries) = match cached {
            Some(snapshot) => (Some(snapshot.fetched_at), snapshot.entries),
            None => (None, BTreeMap::new()),
        };

        let mut collection: MetadataCollection = BTreeMap::new();
        let mut missing = Vec::new();
        for name in unique {
            match cached_entries.get(name) {
                Some(metadata) => {
                    let outcome = MetadataOutcome::Available(metadata.clone());
                    collection.insert(name.to_string(), outcome);
                }
                None => missing.push(name.to_string()),
            }
        }

        tracing::debug!(
            reused = collection.len(),
            to_fetch = missing.len(),
            "metadata cache lookup"
        );

        if missing.is_empty() {
            return collection;
        }

        let fetched = self.fetch_missing(missing).await;
        let fetched_available: BTreeMap<String, PackageMetadata> = fetched
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                MetadataOutcome::Available(m) => Some((name.clone(), m.clone())),
                MetadataOutcome::Unavailable { .. } => None,
            })
            .collect();
        collection.extend(fetched);

        if !fetched_available.is_empty() {
            let mut entries = cached_entries;
            entries.extend(fetched_available);
            // Reused entries keep their age, so the snapshot is as old as its oldest entry
            let snapshot = CachedMetadata {
                fetched_at: cached_at.unwrap_or_else(Utc::now),
                entries,
            };
            self.store(&snapshot);
        }

        collection
    }

    fn load_fresh(&self) -> Option<CachedMetadata> {
        let cache = self.cache.as_ref()?;
        match cache.load() {
            Ok(Some(snapshot)) if self.policy.is_fresh(snapshot.fetched_at, Utc::now()) => {
                Some(snapshot)
            }
            Ok(Some(snapshot)) => {
                tracing::debug!(fetched_at = %snapshot.fetched_at, "metadata cache is stale");
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load metadata cache");
                self.progress_reporter
                    .report_error(&format!("⚠️  Ignoring metadata cache: {}", e));
                None
            }
        }
    }

    fn store(&self, snapshot: &CachedMetadata) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        if let Err(e) = cache.store(snapshot) {
            tracing::warn!(error = %e, "failed to store metadata cache");
            self.progress_reporter
                .report_error(&format!("⚠️  Could not update metadata cache: {}", e));
        }
    }

    async fn fetch_missing(&self, names: Vec<String>) -> MetadataCollection {
        let total = names.len();
        self.progress_reporter.report(&format!(
            "🔍 Fetching metadata for {} formula(s) ({} concurrent)...",
            total, self.concurrency
        ));

        let repository = &self.repository;
        let mut results = stream::iter(names)
            .map(|name| async move {
                let outcome = match repository.fetch_metadata(&name).await {
                    Ok(metadata) => MetadataOutcome::Available(metadata),
                    Err(e) => {
                        tracing::warn!(formula = %name, error = %e, "metadata unavailable");
                        MetadataOutcome::Unavailable {
                            reason: e.to_string(),
                        }
                    }
                };
                (name, outcome)
            })
            .buffer_unordered(self.concurrency);

        let mut collection = BTreeMap::new();
        let mut unavailable = 0usize;
        while let Some((name, outcome)) = results.next().await {
            if !outcome.is_available() {
                unavailable += 1;
            }
            self.progress_reporter
                .report_progress(collection.len() + 1, total, Some(&name));
            collection.insert(name, outcome);
        }

        if unavailable > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Metadata unavailable for {} of {} formula(s); they contribute no edges",
                unavailable, total
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Metadata collected for {} formula(s)",
            total - unavailable
        ));

        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Result;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeRepository {
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl FakeRepository {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FormulaMetadataRepository for FakeRepository {
        async fn fetch_metadata(&self, name: &str) -> Result<PackageMetadata> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if name == "broken" {
                anyhow::bail!("status 404 Not Found");
            }
            Ok(PackageMetadata {
                name: name.to_string(),
                dependencies: vec!["zlib".to_string()],
                ..PackageMetadata::default()
            })
        }
    }

    #[derive(Default)]
    struct MemoryCache {
        snapshot: Mutex<Option<CachedMetadata>>,
        fail: bool,
    }

    impl MetadataCache for MemoryCache {
        fn load(&self) -> Result<Option<CachedMetadata>> {
            if self.fail {
                anyhow::bail!("disk on fire");
            }
            Ok(self.snapshot.lock().unwrap().clone())
        }

        fn store(&self, snapshot: &CachedMetadata) -> Result<()> {
            if self.fail {
                anyhow::bail!("disk on fire");
            }
            *self.snapshot.lock().unwrap() = Some(snapshot.clone());
            Ok(())
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn use_case(
        cache: Option<MemoryCache>,
        concurrency: usize,
    ) -> CollectMetadataUseCase<FakeRepository, MemoryCache, SilentReporter> {
        CollectMetadataUseCase::new(
            FakeRepository::new(),
            cache,
            SilentReporter,
            concurrency,
            FreshnessPolicy::from_hours(Some(24)),
        )
    }

    #[tokio::test]
    async fn test_one_outcome_per_unique_name() {
        let uc = use_case(None, 4);
        let collection = uc
            .collect_all(&names(&["wget", "curl", "wget", "broken"]), false)
            .await;

        assert_eq!(collection.len(), 3);
        assert_eq!(uc.repository.calls.load(Ordering::SeqCst), 3);
        assert!(collection["wget"].is_available());
        assert!(matches!(
            collection["broken"],
            MetadataOutcome::Unavailable { ref reason } if reason.contains("404")
        ));
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let uc = use_case(None, 2);
        let many: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
        uc.collect_all(&many, false).await;

        assert!(uc.repository.max_in_flight.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_fresh_cache_entries_are_reused() {
        let cache = MemoryCache::default();
        let mut entries = BTreeMap::new();
        entries.insert("wget".to_string(), PackageMetadata::empty("wget"));
        *cache.snapshot.lock().unwrap() = Some(CachedMetadata {
            fetched_at: Utc::now() - Duration::hours(1),
            entries,
        });

        let uc = use_case(Some(cache), 4);
        let collection = uc.collect_all(&names(&["wget", "curl"]), false).await;

        assert_eq!(uc.repository.calls.load(Ordering::SeqCst), 1);
        assert_eq!(collection["wget"], MetadataOutcome::Available(PackageMetadata::empty("wget")));

        let stored = uc.cache.as_ref().unwrap().snapshot.lock().unwrap().clone().unwrap();
        assert!(stored.entries.contains_key("curl"));
        assert!(stored.entries.contains_key("wget"));
    }

    #[tokio::test]
    async fn test_stale_cache_is_refetched() {
        let cache = MemoryCache::default();
        let mut entries = BTreeMap::new();
        entries.insert("wget".to_string(), PackageMetadata::empty("wget"));
        *cache.snapshot.lock().unwrap() = Some(CachedMetadata {
            fetched_at: Utc::now() - Duration::hours(48),
            entries,
        });

        let uc = use_case(Some(cache), 4);
        let collection = uc.collect_all(&names(&["wget"]), false).await;

        assert_eq!(uc.repository.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            collection["wget"].metadata_or_empty("wget").dependencies,
            vec!["zlib"]
        );
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let cache = MemoryCache::default();
        let mut entries = BTreeMap::new();
        entries.insert("wget".to_string(), PackageMetadata::empty("wget"));
        *cache.snapshot.lock().unwrap() = Some(CachedMetadata {
            fetched_at: Utc::now(),
            entries,
        });

        let uc = use_case(Some(cache), 4);
        uc.collect_all(&names(&["wget"]), true).await;

        assert_eq!(uc.repository.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cache_failure_degrades_to_fetch() {
        let cache = MemoryCache {
            fail: true,
            ..MemoryCache::default()
        };
        let uc = use_case(Some(cache), 4);
        let collection = uc.collect_all(&names(&["wget"]), false).await;

        assert!(collection["wget"].is_available());
    }

    #[tokio::test]
    async fn test_empty_input() {
        let uc = use_case(None, 4);
        assert!(uc.collect_all(&[], false).await.is_empty());
        assert_eq!(uc.repository.calls.load(Ordering::SeqCst), 0);
    }
}
