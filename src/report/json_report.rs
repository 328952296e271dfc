//! @ai:module:intent JSON export of solve statistics
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::aggregate::SolutionSummary;
use crate::error::Result;
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Write the summary as JSON
    fn generate(&self, summary: &SolutionSummary, output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes solve summaries as pretty-printed JSON
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file, creating parent directories
    /// @ai:effects fs:write
    fn generate(&self, summary: &SolutionSummary, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(summary)?;
        std::fs::write(output_path, json)?;

        tracing::debug!("JSON report written to {}", output_path.display());
        Ok(())
    }
}
