use crate::analytics::domain::{AnalyticsEndpoint, AnalyticsTable, OperatingSystem, ReportMetadata};
use crate::analytics::services::{InstallAggregator, InstallTables, TableNormalizer};
use crate::application::dto::InstallReport;
use crate::application::read_models::{InstallTrendPanel, RequestRatioPanel};
use crate::ports::outbound::{AnalyticsSource, ProgressReporter};
use crate::shared::Result;

/// BuildInstallReportUseCase - fetches every analytics endpoint and joins
/// the install tables into render-ready panels
///
/// Bulk endpoints are fetched one after another. Any failure, whether
/// transport, schema or parse, aborts the report.
pub struct BuildInstallReportUseCase<S, P> {
    source: S,
    progress_reporter: P,
}

impl<S, P> BuildInstallReportUseCase<S, P>
where
    S: AnalyticsSource,
    P: ProgressReporter,
{
    pub fn new(source: S, progress_reporter: P) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Fetches and normalizes all analytics endpoints, grouped by metric
    pub async fn fetch_tables(&self) -> Result<InstallTables> {
        let endpoints = AnalyticsEndpoint::all();
        let total = endpoints.len();
        self.progress_reporter
            .report(&format!("📥 Fetching {} analytics tables...", total));

        let mut tables: Vec<(AnalyticsEndpoint, AnalyticsTable)> = Vec::with_capacity(total);
        for (idx, endpoint) in endpoints.into_iter().enumerate() {
            let label = endpoint.label();
            let document = self.source.fetch_document(&endpoint).await?;
            let table = TableNormalizer::normalize(&label, &document)?;
            tracing::debug!(endpoint = %label, rows = table.len(), "table normalized");

            self.progress_reporter
                .report_progress(idx + 1, total, Some(&label));
            tables.push((endpoint, table));
        }

        self.progress_reporter
            .report_completion(&format!("✅ Fetched {} analytics tables", total));

        Ok(InstallAggregator::split_tables(&tables))
    }

    /// Builds the install report
    pub async fn execute(&self) -> Result<InstallReport> {
        let tables = self.fetch_tables().await?;
        Ok(Self::build_report(tables))
    }

    /// Turns grouped tables into the report; no I/O
    pub fn build_report(tables: InstallTables) -> InstallReport {
        let rows = InstallAggregator::aggregate(&tables.regular, &tables.on_request);

        let trend_panels = OperatingSystem::ALL
            .iter()
            .map(|&os| InstallTrendPanel::build(&rows, os))
            .collect();
        let request_ratio_panels = OperatingSystem::ALL
            .iter()
            .map(|&os| RequestRatioPanel::build(&rows, os))
            .collect();

        InstallReport {
            metadata: ReportMetadata::generate_default(),
            trend_panels,
            request_ratio_panels,
            cask_installs: tables.casks,
            build_errors: tables.build_errors,
            rows,
        }
    }
}
