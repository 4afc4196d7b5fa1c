use brew_analytics::ports::outbound::CachedMetadata;
use brew_analytics::prelude::*;
use std::sync::{Arc, Mutex};

/// In-memory MetadataCache; clones share the stored snapshot
#[derive(Default, Clone)]
pub struct InMemoryMetadataCache {
    pub snapshot: Arc<Mutex<Option<CachedMetadata>>>,
    pub store_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl InMemoryMetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: CachedMetadata) -> Self {
        let cache = Self::new();
        *cache.snapshot.lock().unwrap() = Some(snapshot);
        cache
    }

    pub fn stored(&self) -> Option<CachedMetadata> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn stores(&self) -> usize {
        *self.store_count.lock().unwrap()
    }
}

impl MetadataCache for InMemoryMetadataCache {
    fn load(&self) -> Result<Option<CachedMetadata>> {
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn store(&self, snapshot: &CachedMetadata) -> Result<()> {
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        *self.store_count.lock().unwrap() += 1;
        Ok(())
    }
}
