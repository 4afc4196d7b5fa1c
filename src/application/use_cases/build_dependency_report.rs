use super::build_install_report::BuildInstallReportUseCase;
use super::collect_metadata::CollectMetadataUseCase;
use crate::analytics::domain::{
    collection_metadata, DependencyEdge, MetadataOutcome, RelationKind, ReportMetadata,
};
use crate::analytics::services::{
    DependencyGraphBuilder, DependencyMatrixBuilder, DependencyTreeWalker,
};
use crate::application::dto::{
    DependencyRequest, EdgeReport, EdgeSourceSpec, MatrixReport, TreeReport,
};
use crate::application::read_models::PopularityEntry;
use crate::ports::outbound::{
    AnalyticsSource, EdgeReader, FormulaMetadataRepository, MetadataCache, ProgressReporter,
};
use crate::shared::Result;

/// BuildDependencyReportUseCase - produces edges, trees and matrices
///
/// Edges either come from an edges file or are built live: the install
/// tables give the formula names, the metadata collector gives their
/// dependency lists.
///
/// # Type Parameters
/// * `S` - AnalyticsSource implementation
/// * `R` - FormulaMetadataRepository implementation
/// * `C` - MetadataCache implementation
/// * `E` - EdgeReader implementation
/// * `P` - ProgressReporter implementation
pub struct BuildDependencyReportUseCase<S, R, C, E, P> {
    installs: BuildInstallReportUseCase<S, P>,
    collector: CollectMetadataUseCase<R, C, P>,
    edge_reader: E,
}

impl<S, R, C, E, P> BuildDependencyReportUseCase<S, R, C, E, P>
where
    S: AnalyticsSource,
    R: FormulaMetadataRepository,
    C: MetadataCache,
    E: EdgeReader,
    P: ProgressReporter,
{
    pub fn new(
        installs: BuildInstallReportUseCase<S, P>,
        collector: CollectMetadataUseCase<R, C, P>,
        edge_reader: E,
    ) -> Self {
        Self {
            installs,
            collector,
            edge_reader,
        }
    }

    /// Builds the edge report, including which formulas had no metadata
    pub async fn edges(&self, request: &DependencyRequest) -> Result<EdgeReport> {
        let (edges, unavailable) = self.load_edges(request).await?;
        let popularity =
            PopularityEntry::from_counts(DependencyGraphBuilder::depended_upon_counts(&edges));

        Ok(EdgeReport {
            metadata: ReportMetadata::generate_default(),
            relation: request.relation,
            unavailable,
            edges,
            popularity,
        })
    }

    /// Builds the dependency tree of `root`
    ///
    /// # Errors
    /// Fails if `root` does not occur in the relation or the relation has a
    /// cycle reachable from `root`
    pub async fn tree(&self, request: &DependencyRequest, root: &str) -> Result<TreeReport> {
        let (edges, _) = self.load_edges(request).await?;
        let tree = DependencyTreeWalker::build_tree(&edges, root)?;
        let points = DependencyTreeWalker::linearize(&tree);

        Ok(TreeReport {
            metadata: ReportMetadata::generate_default(),
            relation: request.relation,
            root: root.to_string(),
            node_count: tree.node_count(),
            depth: tree.depth(),
            tree,
            points,
        })
    }

    /// Builds the adjacency matrix of the `top_n` most depended-upon formulas
    pub async fn matrix(&self, request: &DependencyRequest, top_n: usize) -> Result<MatrixReport> {
        let (edges, _) = self.load_edges(request).await?;
        let matrix = DependencyMatrixBuilder::build_matrix(&edges, top_n);

        Ok(MatrixReport {
            metadata: ReportMetadata::generate_default(),
            relation: request.relation,
            top_n,
            matrix,
        })
    }

    async fn load_edges(
        &self,
        request: &DependencyRequest,
    ) -> Result<(Vec<DependencyEdge>, Vec<String>)> {
        match &request.source {
            EdgeSourceSpec::File(path) => {
                let edges = self.edge_reader.read_edges(path)?;
                Ok((edges, Vec::new()))
            }
            EdgeSourceSpec::Live { refresh } => {
                self.live_edges(request.relation, *refresh).await
            }
        }
    }

    async fn live_edges(
        &self,
        relation: RelationKind,
        refresh: bool,
    ) -> Result<(Vec<DependencyEdge>, Vec<String>)> {
        let tables = self.installs.fetch_tables().await?;
        let names = tables.formula_names();
        let collection = self.collector.collect_all(&names, refresh).await;

        let unavailable = collection
            .iter()
            .filter(|(_, outcome)| matches!(outcome, MetadataOutcome::Unavailable { .. }))
            .map(|(name, _)| name.clone())
            .collect();
        let edges =
            DependencyGraphBuilder::build_edges(&collection_metadata(&collection), relation);
        tracing::debug!(formulas = collection.len(), edges = edges.len(), %relation, "edges built");

        Ok((edges, unavailable))
    }
}
