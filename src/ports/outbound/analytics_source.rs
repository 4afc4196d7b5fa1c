use crate::analytics::domain::AnalyticsEndpoint;
use crate::shared::error::AnalyticsError;
use async_trait::async_trait;
use serde_json::Value;

/// AnalyticsSource port for fetching bulk analytics documents
///
/// Bulk endpoints are expected to always succeed; an error here is a hard
/// failure for the report being built.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Fetches the raw JSON document published at `endpoint`
    ///
    /// # Errors
    /// Returns `AnalyticsError::Transport` on a network failure or a
    /// non-success status code.
    async fn fetch_document(&self, endpoint: &AnalyticsEndpoint) -> Result<Value, AnalyticsError>;
}
