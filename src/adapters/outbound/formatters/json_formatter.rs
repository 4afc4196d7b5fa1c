use crate::application::dto::AnalyticsReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Top-level JSON document: the report's own fields plus a `kind` tag so
/// a consumer can tell the report shapes apart
#[derive(Serialize)]
struct Envelope<'a> {
    kind: &'static str,
    #[serde(flatten)]
    report: &'a AnalyticsReport,
}

/// JsonFormatter adapter emitting render-ready JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn kind(report: &AnalyticsReport) -> &'static str {
        match report {
            AnalyticsReport::Installs(_) => "installs",
            AnalyticsReport::Edges(_) => "edges",
            AnalyticsReport::Tree(_) => "tree",
            AnalyticsReport::Matrix(_) => "matrix",
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AnalyticsReport) -> Result<String> {
        let envelope = Envelope {
            kind: Self::kind(report),
            report,
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }
}
