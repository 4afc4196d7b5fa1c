use crate::analytics::domain::PackageMetadata;
use crate::shared::Result;
use async_trait::async_trait;

/// FormulaMetadataRepository port for per-formula metadata lookups
///
/// Implementations must be `Send + Sync`: the collector issues many
/// lookups concurrently against a single shared instance.
#[async_trait]
pub trait FormulaMetadataRepository: Send + Sync {
    /// Fetches the metadata document of one formula
    ///
    /// # Errors
    /// Returns an error if the formula does not exist, the request fails,
    /// or the document cannot be decoded. Callers decide whether that is fatal.
    async fn fetch_metadata(&self, name: &str) -> Result<PackageMetadata>;
}
