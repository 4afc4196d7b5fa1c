/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and reports out to the
/// formatters, keeping the domain layer isolated.
mod analytics_report;
mod output_format;
mod requests;

pub use analytics_report::{AnalyticsReport, EdgeReport, InstallReport, MatrixReport, TreeReport};
pub use output_format::OutputFormat;
pub use requests::{DependencyRequest, EdgeSourceSpec};
