use serde::{Deserialize, Serialize};
use std::fmt;

/// Default root of the Homebrew JSON API
pub const DEFAULT_API_BASE_URL: &str = "https://formulae.brew.sh/api";

/// Operating system an analytics count was recorded on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Macos,
    Linux,
}

impl OperatingSystem {
    pub const ALL: [OperatingSystem; 2] = [OperatingSystem::Macos, OperatingSystem::Linux];

    /// Path segment of the analytics API for this platform
    fn analytics_path(self) -> &'static str {
        match self {
            OperatingSystem::Macos => "analytics",
            OperatingSystem::Linux => "analytics-linux",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingSystem::Macos => write!(f, "macos"),
            OperatingSystem::Linux => write!(f, "linux"),
        }
    }
}

/// Trailing period an analytics count covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Window {
    Days30,
    Days90,
    Days365,
}

impl Window {
    pub const ALL: [Window; 3] = [Window::Days30, Window::Days90, Window::Days365];

    pub fn days(self) -> u32 {
        match self {
            Window::Days30 => 30,
            Window::Days90 => 90,
            Window::Days365 => 365,
        }
    }
}

impl From<Window> for u32 {
    fn from(window: Window) -> Self {
        window.days()
    }
}

impl TryFrom<u32> for Window {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(Window::Days30),
            90 => Ok(Window::Days90),
            365 => Ok(Window::Days365),
            other => Err(format!(
                "Invalid window: {} days. Expected 30, 90 or 365",
                other
            )),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days())
    }
}

/// Which analytics counter an endpoint publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    Install,
    InstallOnRequest,
    CaskInstall,
    BuildError,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Install,
        Metric::InstallOnRequest,
        Metric::CaskInstall,
        Metric::BuildError,
    ];

    fn path(self) -> &'static str {
        match self {
            Metric::Install => "install",
            Metric::InstallOnRequest => "install-on-request",
            Metric::CaskInstall => "cask-install",
            Metric::BuildError => "build-error",
        }
    }

    /// Casks are only published for macOS
    fn available_on(self, os: OperatingSystem) -> bool {
        !(self == Metric::CaskInstall && os == OperatingSystem::Linux)
    }
}

/// One analytics endpoint: a (metric, platform, window) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalyticsEndpoint {
    pub metric: Metric,
    pub os: OperatingSystem,
    pub window: Window,
}

impl AnalyticsEndpoint {
    pub fn new(metric: Metric, os: OperatingSystem, window: Window) -> Self {
        Self { metric, os, window }
    }

    /// Every endpoint the analytics API publishes (21 in total)
    pub fn all() -> Vec<AnalyticsEndpoint> {
        let mut endpoints = Vec::new();
        for os in OperatingSystem::ALL {
            for metric in Metric::ALL {
                if !metric.available_on(os) {
                    continue;
                }
                for window in Window::ALL {
                    endpoints.push(AnalyticsEndpoint::new(metric, os, window));
                }
            }
        }
        endpoints
    }

    /// Short label used in progress output and error messages
    pub fn label(&self) -> String {
        format!("{}/{}/{}", self.os.analytics_path(), self.metric.path(), self.window)
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}.json", base_url.trim_end_matches('/'), self.label())
    }
}

/// URL of the metadata document for a single formula
pub fn formula_metadata_url(base_url: &str, encoded_name: &str) -> String {
    format!(
        "{}/formula/{}.json",
        base_url.trim_end_matches('/'),
        encoded_name
    )
}
