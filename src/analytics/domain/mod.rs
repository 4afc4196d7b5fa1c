pub mod adjacency_matrix;
pub mod analytics_table;
pub mod dependency_edge;
pub mod dependency_tree;
pub mod endpoint;
pub mod install_record;
pub mod package_metadata;
pub mod report_metadata;

pub use adjacency_matrix::{AdjacencyCell, AdjacencyMatrix};
pub use analytics_table::{AnalyticsTable, CountRow, ItemKind};
pub use dependency_edge::DependencyEdge;
pub use dependency_tree::{DependencyTreeNode, TreePoint};
pub use endpoint::{
    formula_metadata_url, AnalyticsEndpoint, Metric, OperatingSystem, Window,
    DEFAULT_API_BASE_URL,
};
pub use install_record::{
    AggregatedInstallRow, BuildErrorRecord, CaskInstallRecord, InstallKey, InstallRecord,
};
pub use package_metadata::{
    collection_metadata, MetadataCollection, MetadataOutcome, PackageMetadata, RelationKind,
};
pub use report_metadata::ReportMetadata;
