//! Read models for CQRS-lite pattern
//!
//! Render-ready views built from aggregated domain data. A presentation
//! layer can plot them without further processing.

pub mod install_trend_view;
pub mod popularity_view;
pub mod request_ratio_view;

pub use install_trend_view::{InstallTrendPanel, TrendPoint, PANEL_SIZE};
pub use popularity_view::PopularityEntry;
pub use request_ratio_view::{RatioSeries, RequestRatioPanel};
