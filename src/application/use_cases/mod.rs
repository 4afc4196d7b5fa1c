/// Use cases module containing application business logic orchestration
mod build_dependency_report;
mod build_install_report;
mod collect_metadata;

pub use build_dependency_report::BuildDependencyReportUseCase;
pub use build_install_report::BuildInstallReportUseCase;
pub use collect_metadata::{default_concurrency, CollectMetadataUseCase};
