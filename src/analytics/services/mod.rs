mod dependency_graph_builder;
mod dependency_matrix_builder;
mod dependency_tree_walker;
mod install_aggregator;
mod table_normalizer;

pub use dependency_graph_builder::DependencyGraphBuilder;
pub use dependency_matrix_builder::{DependencyMatrixBuilder, DEFAULT_TOP_N};
pub use dependency_tree_walker::DependencyTreeWalker;
pub use install_aggregator::{InstallAggregator, InstallTables};
pub use table_normalizer::TableNormalizer;
