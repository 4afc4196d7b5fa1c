/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod analytics_source;
pub mod edge_reader;
pub mod formatter;
pub mod metadata_cache;
pub mod metadata_repository;
pub mod output_presenter;
pub mod progress_reporter;

pub use analytics_source::AnalyticsSource;
pub use edge_reader::EdgeReader;
pub use formatter::ReportFormatter;
pub use metadata_cache::{CachedMetadata, FreshnessPolicy, MetadataCache};
pub use metadata_repository::FormulaMetadataRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
