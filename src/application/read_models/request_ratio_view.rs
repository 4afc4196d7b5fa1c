//! Request ratio panel: the share of installs that were explicitly
//! requested, for the most installed formulas of one operating system

use super::install_trend_view::PANEL_SIZE;
use crate::analytics::domain::{AggregatedInstallRow, OperatingSystem, Window};
use serde::Serialize;
use std::collections::HashMap;

/// `pct_on_request` per selected formula for one window, aligned with
/// `RequestRatioPanel::formulas`. `None` where the window has no row for
/// that formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioSeries {
    pub window: Window,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRatioPanel {
    pub operating_system: OperatingSystem,
    pub formulas: Vec<String>,
    pub series: Vec<RatioSeries>,
}

impl RequestRatioPanel {
    /// Selects the `PANEL_SIZE` formulas with the highest regular count in
    /// the 365 day window and lines up their ratio in every window
    pub fn build(rows: &[AggregatedInstallRow], os: OperatingSystem) -> Self {
        let mut yearly: Vec<&AggregatedInstallRow> = rows
            .iter()
            .filter(|r| r.operating_system == os && r.window == Window::Days365)
            .collect();
        yearly.sort_by(|a, b| b.count_regular.cmp(&a.count_regular));

        let formulas: Vec<String> = yearly
            .into_iter()
            .take(PANEL_SIZE)
            .map(|r| r.package_name.clone())
            .collect();

        let series = Window::ALL
            .iter()
            .map(|&window| {
                let ratios: HashMap<&str, f64> = rows
                    .iter()
                    .filter(|r| r.operating_system == os && r.window == window)
                    .map(|r| (r.package_name.as_str(), r.pct_on_request))
                    .collect();
                RatioSeries {
                    window,
                    values: formulas
                        .iter()
                        .map(|name| ratios.get(name.as_str()).copied())
                        .collect(),
                }
            })
            .collect();

        Self {
            operating_system: os,
            formulas,
            series,
        }
    }
}
