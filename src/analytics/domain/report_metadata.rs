use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// ReportMetadata value object stamped on every generated report
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
}

impl ReportMetadata {
    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        run_id: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            run_id,
        }
    }

    /// Metadata with the current timestamp and a fresh run id
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    /// Metadata for this binary, using the compile-time version from Cargo.toml
    pub fn generate_default() -> Self {
        Self::generate(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}
