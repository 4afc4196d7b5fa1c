//! Install trend panel: normalized install rates of the most installed
//! formulas, per operating system

use crate::analytics::domain::{AggregatedInstallRow, OperatingSystem, Window};
use serde::Serialize;

/// Rows taken per window into a panel
pub const PANEL_SIZE: usize = 20;

/// One formula's install rate over one window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub package_name: String,
    pub window: Window,
    pub count_regular: u64,
    pub installs_per_day: f64,
}

/// Install rates for one operating system, all windows stacked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallTrendPanel {
    pub operating_system: OperatingSystem,
    pub points: Vec<TrendPoint>,
}

impl InstallTrendPanel {
    /// Builds the panel for `os`
    ///
    /// For each window the first `PANEL_SIZE` rows are taken in the order
    /// given (API rank order). The stacked points are then sorted by
    /// installs per day, highest first, so windows of different length
    /// compare on the same scale.
    pub fn build(rows: &[AggregatedInstallRow], os: OperatingSystem) -> Self {
        let mut points: Vec<TrendPoint> = Window::ALL
            .iter()
            .flat_map(|window| {
                rows.iter()
                    .filter(move |r| r.operating_system == os && r.window == *window)
                    .take(PANEL_SIZE)
            })
            .map(|row| TrendPoint {
                package_name: row.package_name.clone(),
                window: row.window,
                count_regular: row.count_regular,
                installs_per_day: row.installs_per_day(),
            })
            .collect();

        points.sort_by(|a, b| b.installs_per_day.total_cmp(&a.installs_per_day));

        Self {
            operating_system: os,
            points,
        }
    }

    pub fn points_for(&self, window: Window) -> impl Iterator<Item = &TrendPoint> {
        self.points.iter().filter(move |p| p.window == window)
    }
}
