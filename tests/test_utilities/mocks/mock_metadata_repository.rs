use async_trait::async_trait;
use brew_analytics::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock FormulaMetadataRepository; names without registered metadata fail
/// the way a 404 from the live API does
#[derive(Default)]
pub struct MockMetadataRepository {
    pub metadata: HashMap<String, PackageMetadata>,
    pub call_count: AtomicUsize,
}

#[allow(dead_code)]
impl MockMetadataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependencies(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.metadata.insert(
            name.to_string(),
            PackageMetadata {
                name: name.to_string(),
                dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
                ..PackageMetadata::default()
            },
        );
        self
    }

    pub fn with_metadata(mut self, metadata: PackageMetadata) -> Self {
        self.metadata.insert(metadata.name.clone(), metadata);
        self
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormulaMetadataRepository for MockMetadataRepository {
    async fn fetch_metadata(&self, name: &str) -> Result<PackageMetadata> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match self.metadata.get(name) {
            Some(metadata) => Ok(metadata.clone()),
            None => anyhow::bail!("status 404 Not Found for formula {}", name),
        }
    }
}
