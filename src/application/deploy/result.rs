//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

/// Result of a deploy operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployResult {
    /// Resolved project id (absent when the deploy was skipped)
    pub project_id: Option<String>,
    /// Resolved version; `None` when App Engine generates it
    pub version: Option<String>,
    /// Files or directories handed to gcloud, in order
    pub deployables: Vec<PathBuf>,
    /// Packaging was neither war nor jar
    pub skipped: bool,
}

impl DeployResult {
    pub fn deployed(project_id: String, version: Option<String>, deployables: Vec<PathBuf>) -> Self {
        Self {
            project_id: Some(project_id),
            version,
            deployables,
            skipped: false,
        }
    }

    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }
}
