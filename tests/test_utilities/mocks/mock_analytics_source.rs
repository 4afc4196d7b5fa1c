use async_trait::async_trait;
use brew_analytics::prelude::*;
use brew_analytics::analytics::domain::Metric;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock AnalyticsSource serving canned documents keyed by endpoint label
/// (e.g. `analytics/install/30d`)
#[derive(Default)]
pub struct MockAnalyticsSource {
    pub documents: HashMap<String, Value>,
    pub fetch_count: AtomicUsize,
}

#[allow(dead_code)]
impl MockAnalyticsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, endpoint: &AnalyticsEndpoint, document: Value) -> Self {
        self.documents.insert(endpoint.label(), document);
        self
    }

    /// Every endpoint populated with the same small table:
    /// regular installs wget 1,000 / curl 800 / ffmpeg --HEAD 50,
    /// on-request wget 400 / curl 900 (curl is skewed above 100%) / ffmpeg --HEAD 10,
    /// casks firefox / iterm2, build errors gcc.
    pub fn with_sample_data() -> Self {
        let mut source = Self::new();
        for endpoint in AnalyticsEndpoint::all() {
            let document = match endpoint.metric {
                Metric::Install => {
                    formula_doc(&[("wget", "1,000"), ("curl", "800"), ("ffmpeg --HEAD", "50")])
                }
                Metric::InstallOnRequest => {
                    formula_doc(&[("wget", "400"), ("curl", "900"), ("ffmpeg --HEAD", "10")])
                }
                Metric::CaskInstall => json!({"items": [
                    {"number": 1, "cask": "firefox", "count": "2,000", "percent": "5.5"},
                    {"number": 2, "cask": "iterm2", "count": "1,500", "percent": "4.1"}
                ]}),
                Metric::BuildError => formula_doc(&[("gcc", "12")]),
            };
            source.documents.insert(endpoint.label(), document);
        }
        source
    }

    pub fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

fn formula_doc(rows: &[(&str, &str)]) -> Value {
    let items: Vec<Value> = rows
        .iter()
        .enumerate()
        .map(|(i, (name, count))| {
            json!({"number": i + 1, "formula": name, "count": count, "percent": "1.0"})
        })
        .collect();
    json!({"category": "formula", "items": items})
}

#[async_trait]
impl AnalyticsSource for MockAnalyticsSource {
    async fn fetch_document(
        &self,
        endpoint: &AnalyticsEndpoint,
    ) -> std::result::Result<Value, AnalyticsError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(&endpoint.label())
            .cloned()
            .ok_or_else(|| AnalyticsError::Transport {
                url: endpoint.url("https://formulae.brew.sh/api"),
                details: "status 404 Not Found".to_string(),
            })
    }
}
