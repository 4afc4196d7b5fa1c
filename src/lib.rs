//! brew-analytics - Homebrew analytics pipeline
//!
//! This library fetches the public Homebrew analytics (install,
//! install-on-request, cask-install and build-error counts) and per-formula
//! metadata, joins and normalizes them, and builds render-ready structures:
//! install trend panels, request ratio panels, dependency edges, dependency
//! trees and dependency adjacency matrices.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`analytics`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use brew_analytics::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let use_case = BuildInstallReportUseCase::new(
//!     BrewApiClient::new()?,
//!     StderrProgressReporter::new(),
//! );
//! let report = AnalyticsReport::Installs(use_case.execute().await?);
//!
//! let output = MarkdownFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod analytics;
pub mod application;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        EdgeFileReader, FileSystemWriter, JsonFileCache, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::BrewApiClient;
    pub use crate::analytics::domain::{
        AdjacencyCell, AdjacencyMatrix, AggregatedInstallRow, AnalyticsEndpoint, DependencyEdge,
        DependencyTreeNode, InstallRecord, MetadataCollection, MetadataOutcome, OperatingSystem,
        PackageMetadata, RelationKind, TreePoint, Window,
    };
    pub use crate::analytics::services::{
        DependencyGraphBuilder, DependencyMatrixBuilder, DependencyTreeWalker, InstallAggregator,
        TableNormalizer,
    };
    pub use crate::application::dto::{AnalyticsReport, DependencyRequest, OutputFormat};
    pub use crate::application::use_cases::{
        BuildDependencyReportUseCase, BuildInstallReportUseCase, CollectMetadataUseCase,
    };
    pub use crate::ports::outbound::{
        AnalyticsSource, EdgeReader, FormulaMetadataRepository, FreshnessPolicy, MetadataCache,
        OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::AnalyticsError;
    pub use crate::shared::Result;
}
