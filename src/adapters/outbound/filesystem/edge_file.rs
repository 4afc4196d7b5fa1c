use crate::analytics::domain::DependencyEdge;
use crate::ports::outbound::EdgeReader;
use crate::shared::error::AnalyticsError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// Either a bare list of `[package, depends_on]` pairs or a previously
/// written edges report carrying an `edges` field
#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeDocument {
    Pairs(Vec<DependencyEdge>),
    Report { edges: Vec<DependencyEdge> },
}

/// EdgeFileReader adapter loading dependency edges from a JSON file
pub struct EdgeFileReader;

impl EdgeFileReader {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(content: &str, path: &Path) -> Result<Vec<DependencyEdge>> {
        let document: EdgeDocument =
            serde_json::from_str(content).map_err(|e| AnalyticsError::FileReadError {
                path: path.to_path_buf(),
                details: format!(
                    "expected a list of [package, depends_on] pairs or an object with 'edges': {}",
                    e
                ),
            })?;

        Ok(match document {
            EdgeDocument::Pairs(edges) | EdgeDocument::Report { edges } => edges,
        })
    }
}

impl Default for EdgeFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeReader for EdgeFileReader {
    fn read_edges(&self, path: &Path) -> Result<Vec<DependencyEdge>> {
        let content =
            read_regular_file(path, "edges file").map_err(|e| AnalyticsError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        let edges = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), edges = edges.len(), "edges loaded");
        Ok(edges)
    }
}
