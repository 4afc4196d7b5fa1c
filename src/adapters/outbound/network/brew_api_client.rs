use crate::analytics::domain::{
    formula_metadata_url, AnalyticsEndpoint, PackageMetadata, DEFAULT_API_BASE_URL,
};
use crate::ports::outbound::{AnalyticsSource, FormulaMetadataRepository};
use crate::shared::error::AnalyticsError;
use crate::shared::security::validate_url_component;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// BrewApiClient adapter for the formulae.brew.sh JSON API
///
/// Serves both the bulk analytics documents and the per-formula metadata
/// documents from one shared async client. There is no retry: a failed
/// request is reported once and the caller decides whether it is fatal.
pub struct BrewApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BrewApiClient {
    /// Creates a client against the public API with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_API_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_options(base_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("brew-analytics/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `url` and parses the body as JSON
    ///
    /// # Errors
    /// Returns `AnalyticsError::Transport` for network failures, non-success
    /// status codes and bodies that are not JSON.
    pub async fn fetch_json(&self, url: &str) -> std::result::Result<Value, AnalyticsError> {
        let transport_error = |details: String| {
            tracing::warn!(url, %details, "request failed");
            AnalyticsError::Transport {
                url: url.to_string(),
                details,
            }
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(format!("status {}", status)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| transport_error(format!("invalid JSON body: {}", e)))
    }

    /// Builds the metadata URL for `name`
    ///
    /// # Errors
    /// Returns an error if the name could escape the `formula/` path
    fn metadata_url(&self, name: &str) -> Result<String> {
        validate_url_component(name, "Formula name")?;
        let encoded = urlencoding::encode(name);
        Ok(formula_metadata_url(&self.base_url, &encoded))
    }
}

#[async_trait]
impl AnalyticsSource for BrewApiClient {
    async fn fetch_document(
        &self,
        endpoint: &AnalyticsEndpoint,
    ) -> std::result::Result<Value, AnalyticsError> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(%url, "fetching analytics document");
        self.fetch_json(&url).await
    }
}

#[async_trait]
impl FormulaMetadataRepository for BrewApiClient {
    async fn fetch_metadata(&self, name: &str) -> Result<PackageMetadata> {
        let url = self.metadata_url(name)?;
        let document = self.fetch_json(&url).await?;
        let metadata: PackageMetadata =
            serde_json::from_value(document).map_err(|e| AnalyticsError::Schema {
                source_name: url.clone(),
                details: e.to_string(),
            })?;
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BrewApiClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client =
            BrewApiClient::with_options("http://localhost:8080/api/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_metadata_url_encodes_name() {
        let client = BrewApiClient::new().unwrap();
        let url = client.metadata_url("openssl@3").unwrap();
        assert_eq!(url, "https://formulae.brew.sh/api/formula/openssl%403.json");
    }

    #[test]
    fn test_metadata_url_rejects_path_traversal() {
        let client = BrewApiClient::new().unwrap();
        assert!(client.metadata_url("../cask/firefox").is_err());
        assert!(client.metadata_url("wget?x=1").is_err());
    }

    #[tokio::test]
    async fn test_fetch_metadata_invalid_name_fails_without_request() {
        let client = BrewApiClient::new().unwrap();
        let result = client.fetch_metadata("a/b").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("path separators"));
    }

    #[tokio::test]
    async fn test_fetch_json_unreachable_host_is_transport_error() {
        let client =
            BrewApiClient::with_options("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client
            .fetch_json("http://127.0.0.1:9/analytics/install/30d.json")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::Transport { .. }));
    }
}
