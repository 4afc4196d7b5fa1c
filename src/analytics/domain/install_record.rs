use super::endpoint::{OperatingSystem, Window};
use serde::Serialize;

/// Join key shared by a regular and an on-request record
pub type InstallKey = (String, OperatingSystem, Window);

/// InstallRecord value object: one formula's install count for an
/// (os, window) pair, either all installs or installs on request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallRecord {
    pub package_name: String,
    pub raw_count: u64,
    pub percent: f64,
    pub operating_system: OperatingSystem,
    pub window: Window,
    pub on_request: bool,
}

impl InstallRecord {
    pub fn new(
        package_name: String,
        raw_count: u64,
        percent: f64,
        operating_system: OperatingSystem,
        window: Window,
        on_request: bool,
    ) -> Self {
        Self {
            package_name,
            raw_count,
            percent,
            operating_system,
            window,
            on_request,
        }
    }

    pub fn join_key(&self) -> InstallKey {
        (self.package_name.clone(), self.operating_system, self.window)
    }

    /// Formula name without install options (`"ffmpeg --HEAD"` -> `"ffmpeg"`)
    pub fn bare_name(&self) -> &str {
        self.package_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.package_name)
    }
}

/// A regular install row joined with its install-on-request counterpart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedInstallRow {
    pub package_name: String,
    pub operating_system: OperatingSystem,
    pub window: Window,
    pub count_regular: u64,
    pub count_on_request: u64,
    pub percent_regular: f64,
    pub percent_on_request: f64,
    /// Share of installs that were explicitly requested, in `0..=100`
    pub pct_on_request: f64,
}

impl AggregatedInstallRow {
    /// Installs per day over the row's window
    pub fn installs_per_day(&self) -> f64 {
        self.count_regular as f64 / f64::from(self.window.days())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaskInstallRecord {
    pub cask: String,
    pub raw_count: u64,
    pub percent: f64,
    pub window: Window,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildErrorRecord {
    pub formula: String,
    pub raw_count: u64,
    pub percent: f64,
    pub operating_system: OperatingSystem,
    pub window: Window,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> InstallRecord {
        InstallRecord::new(
            name.to_string(),
            10,
            1.5,
            OperatingSystem::Macos,
            Window::Days30,
            false,
        )
    }

    #[test]
    fn test_bare_name_strips_options() {
        assert_eq!(record("ffmpeg --HEAD").bare_name(), "ffmpeg");
        assert_eq!(record("wget").bare_name(), "wget");
    }

    #[test]
    fn test_join_key_ignores_on_request_flag() {
        let regular = record("wget");
        let mut on_request = record("wget");
        on_request.on_request = true;
        assert_eq!(regular.join_key(), on_request.join_key());
    }

    #[test]
    fn test_installs_per_day() {
        let row = AggregatedInstallRow {
            package_name: "wget".to_string(),
            operating_system: OperatingSystem::Linux,
            window: Window::Days90,
            count_regular: 900,
            count_on_request: 450,
            percent_regular: 1.0,
            percent_on_request: 1.0,
            pct_on_request: 50.0,
        };
        assert_eq!(row.installs_per_day(), 10.0);
    }
}
