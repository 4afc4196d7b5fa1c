use crate::analytics::domain::{
    AdjacencyMatrix, AggregatedInstallRow, BuildErrorRecord, CaskInstallRecord, DependencyEdge,
    DependencyTreeNode, RelationKind, ReportMetadata, TreePoint,
};
use crate::application::read_models::{InstallTrendPanel, PopularityEntry, RequestRatioPanel};
use serde::Serialize;

/// Install analytics joined across all endpoints
#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub metadata: ReportMetadata,
    pub trend_panels: Vec<InstallTrendPanel>,
    pub request_ratio_panels: Vec<RequestRatioPanel>,
    pub cask_installs: Vec<CaskInstallRecord>,
    pub build_errors: Vec<BuildErrorRecord>,
    pub rows: Vec<AggregatedInstallRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeReport {
    pub metadata: ReportMetadata,
    pub relation: RelationKind,
    /// Formulas whose metadata could not be fetched; they contribute no edges
    pub unavailable: Vec<String>,
    pub edges: Vec<DependencyEdge>,
    pub popularity: Vec<PopularityEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreeReport {
    pub metadata: ReportMetadata,
    pub relation: RelationKind,
    pub root: String,
    pub node_count: usize,
    pub depth: usize,
    pub tree: DependencyTreeNode,
    pub points: Vec<TreePoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixReport {
    pub metadata: ReportMetadata,
    pub relation: RelationKind,
    pub top_n: usize,
    pub matrix: AdjacencyMatrix,
}

/// AnalyticsReport - what a use case hands to a formatter
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalyticsReport {
    Installs(InstallReport),
    Edges(EdgeReport),
    Tree(TreeReport),
    Matrix(MatrixReport),
}

impl AnalyticsReport {
    pub fn metadata(&self) -> &ReportMetadata {
        match self {
            AnalyticsReport::Installs(r) => &r.metadata,
            AnalyticsReport::Edges(r) => &r.metadata,
            AnalyticsReport::Tree(r) => &r.metadata,
            AnalyticsReport::Matrix(r) => &r.metadata,
        }
    }

    pub fn title(&self) -> String {
        match self {
            AnalyticsReport::Installs(_) => "Homebrew Install Analytics".to_string(),
            AnalyticsReport::Edges(r) => format!("Homebrew Dependency Edges ({})", r.relation),
            AnalyticsReport::Tree(r) => format!("Dependency Tree: {}", r.root),
            AnalyticsReport::Matrix(r) => format!("Dependency Matrix (top {})", r.matrix.size()),
        }
    }
}
