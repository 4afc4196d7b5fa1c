//! Configuration file support for brew-analytics.
//!
//! Provides YAML-based configuration through `brew-analytics.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::filesystem::DEFAULT_CACHE_FILE;
use crate::adapters::outbound::network::DEFAULT_TIMEOUT_SECS;
use crate::analytics::domain::DEFAULT_API_BASE_URL;
use crate::analytics::services::DEFAULT_TOP_N;
use crate::application::dto::OutputFormat;
use crate::application::use_cases::default_concurrency;
use crate::shared::error::AnalyticsError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "brew-analytics.config.yml";

/// Default cache lifetime
pub const DEFAULT_CACHE_MAX_AGE_HOURS: u64 = 24;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub cache_path: Option<PathBuf>,
    /// `0` disables the cache
    pub cache_max_age_hours: Option<u64>,
    pub concurrency: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub top_n: Option<usize>,
    pub format: Option<OutputFormat>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after defaults, config file and flags are merged
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    pub cache_path: PathBuf,
    pub cache_max_age_hours: u64,
    pub concurrency: usize,
    pub request_timeout_secs: u64,
    pub top_n: usize,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            cache_max_age_hours: DEFAULT_CACHE_MAX_AGE_HOURS,
            concurrency: default_concurrency(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            top_n: DEFAULT_TOP_N,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Config values override defaults; flags (`format`, `top_n`) override both
    pub fn merge(
        config: Option<ConfigFile>,
        format_flag: Option<OutputFormat>,
        top_n_flag: Option<usize>,
    ) -> Self {
        let mut settings = Settings::default();
        if let Some(config) = config {
            if let Some(url) = config.api_base_url {
                settings.api_base_url = url;
            }
            if let Some(path) = config.cache_path {
                settings.cache_path = path;
            }
            if let Some(hours) = config.cache_max_age_hours {
                settings.cache_max_age_hours = hours;
            }
            if let Some(concurrency) = config.concurrency {
                settings.concurrency = concurrency;
            }
            if let Some(timeout) = config.request_timeout_secs {
                settings.request_timeout_secs = timeout;
            }
            if let Some(top_n) = config.top_n {
                settings.top_n = top_n;
            }
            if let Some(format) = config.format {
                settings.format = format;
            }
        }
        if let Some(format) = format_flag {
            settings.format = format;
        }
        if let Some(top_n) = top_n_flag {
            settings.top_n = top_n;
        }
        settings
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.api_base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AnalyticsError::Validation {
                message: format!(
                    "api_base_url must start with http:// or https:// (got '{}').\n\n\
                     💡 Hint: The default is \"{}\".",
                    url, DEFAULT_API_BASE_URL
                ),
            }
            .into());
        }
    }

    let positive = [
        ("concurrency", config.concurrency.map(|v| v as u64)),
        ("top_n", config.top_n.map(|v| v as u64)),
        ("request_timeout_secs", config.request_timeout_secs),
    ];
    for (field, value) in positive {
        if value == Some(0) {
            return Err(AnalyticsError::Validation {
                message: format!(
                    "{} must be greater than 0.\n\n\
                     💡 Hint: Remove the field to use the default.",
                    field
                ),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::FreshnessPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
api_base_url: http://localhost:8080/api
cache_path: /tmp/brew-cache.json
cache_max_age_hours: 6
concurrency: 8
request_timeout_secs: 10
top_n: 50
format: markdown
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(config.cache_path, Some(PathBuf::from("/tmp/brew-cache.json")));
        assert_eq!(config.cache_max_age_hours, Some(6));
        assert_eq!(config.concurrency, Some(8));
        assert_eq!(config.request_timeout_secs, Some(10));
        assert_eq!(config.top_n, Some(50));
        assert_eq!(config.format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "top_n: 10\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.top_n, Some(10));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "concurrency: 0\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalyticsError>(),
            Some(AnalyticsError::Validation { .. })
        ));
        assert!(err.to_string().contains("concurrency must be greater than 0"));
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "api_base_url: ftp://example.com\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Validation error: api_base_url must start with http"));
    }

    #[test]
    fn test_huge_cache_max_age_is_accepted() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "cache_max_age_hours: 18446744073709551615\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        let settings = Settings::merge(Some(config), None, None);
        assert_eq!(
            FreshnessPolicy::from_hours(Some(settings.cache_max_age_hours)),
            FreshnessPolicy::Forever
        );
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_merge_precedence() {
        let config = ConfigFile {
            top_n: Some(50),
            format: Some(OutputFormat::Markdown),
            concurrency: Some(3),
            ..ConfigFile::default()
        };

        let settings = Settings::merge(Some(config), Some(OutputFormat::Json), None);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.top_n, 50);
        assert_eq!(settings.concurrency, 3);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_merge_without_config_uses_defaults() {
        let settings = Settings::merge(None, None, Some(7));
        assert_eq!(settings.top_n, 7);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.cache_max_age_hours, DEFAULT_CACHE_MAX_AGE_HOURS);
        assert!(settings.concurrency >= 1);
    }
}
