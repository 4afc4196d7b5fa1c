use super::table_normalizer::TableNormalizer;
use crate::analytics::domain::{
    AggregatedInstallRow, AnalyticsEndpoint, AnalyticsTable, BuildErrorRecord, CaskInstallRecord,
    InstallKey, InstallRecord, Metric,
};
use std::collections::{BTreeSet, HashMap};

/// Normalized tables grouped by what they measure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallTables {
    pub regular: Vec<InstallRecord>,
    pub on_request: Vec<InstallRecord>,
    pub casks: Vec<CaskInstallRecord>,
    pub build_errors: Vec<BuildErrorRecord>,
}

impl InstallTables {
    /// Unique formula names (install options stripped) across every
    /// formula-keyed table, sorted
    pub fn formula_names(&self) -> Vec<String> {
        let installs = self
            .regular
            .iter()
            .chain(&self.on_request)
            .map(|r| r.bare_name());
        let build_errors = self
            .build_errors
            .iter()
            .filter_map(|r| r.formula.split_whitespace().next());

        installs
            .chain(build_errors)
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// InstallAggregator service joining regular and install-on-request counts
///
/// This service contains pure business logic with no I/O.
pub struct InstallAggregator;

impl InstallAggregator {
    /// Routes each table to its group by the endpoint metric it was fetched from
    pub fn split_tables(tables: &[(AnalyticsEndpoint, AnalyticsTable)]) -> InstallTables {
        let mut grouped = InstallTables::default();
        for (endpoint, table) in tables {
            match endpoint.metric {
                Metric::Install => grouped
                    .regular
                    .extend(TableNormalizer::to_install_records(table, endpoint)),
                Metric::InstallOnRequest => grouped
                    .on_request
                    .extend(TableNormalizer::to_install_records(table, endpoint)),
                Metric::CaskInstall => grouped
                    .casks
                    .extend(TableNormalizer::to_cask_records(table, endpoint)),
                Metric::BuildError => grouped
                    .build_errors
                    .extend(TableNormalizer::to_build_error_records(table, endpoint)),
            }
        }
        grouped
    }

    /// Inner-joins the two tables on (package, os, window) and computes
    /// `pct_on_request = 100 * on_request / regular`.
    ///
    /// Rows without a counterpart on either side are left out. The two
    /// source endpoints are not snapshotted at the same instant, so the
    /// on-request count can exceed the regular one; such rows (and rows
    /// with a zero regular count) are dropped rather than clamped.
    ///
    /// Output follows the order of `regular`.
    pub fn aggregate(
        regular: &[InstallRecord],
        on_request: &[InstallRecord],
    ) -> Vec<AggregatedInstallRow> {
        let mut on_request_by_key: HashMap<InstallKey, &InstallRecord> = HashMap::new();
        for record in on_request {
            on_request_by_key.entry(record.join_key()).or_insert(record);
        }

        let mut rows = Vec::new();
        let mut dropped = 0usize;

        for record in regular {
            let Some(requested) = on_request_by_key.get(&record.join_key()) else {
                continue;
            };

            let pct_on_request = 100.0 * requested.raw_count as f64 / record.raw_count as f64;
            if !pct_on_request.is_finite() || pct_on_request > 100.0 {
                dropped += 1;
                continue;
            }

            rows.push(AggregatedInstallRow {
                package_name: record.package_name.clone(),
                operating_system: record.operating_system,
                window: record.window,
                count_regular: record.raw_count,
                count_on_request: requested.raw_count,
                percent_regular: record.percent,
                percent_on_request: requested.percent,
                pct_on_request,
            });
        }

        if dropped > 0 {
            tracing::debug!(
                dropped,
                kept = rows.len(),
                "dropped rows with on-request share outside 0..=100 (snapshot skew)"
            );
        }

        rows
    }
}
