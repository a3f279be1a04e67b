//! VersionAction value object - operations on an already deployed version

use serde::{Deserialize, Serialize};

/// What to do with a deployed version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionAction {
    /// Start serving the version
    Start,
    /// Route all of the service's traffic to the version
    SetDefault,
}

impl VersionAction {
    pub fn name(&self) -> &'static str {
        match self {
            VersionAction::Start => "start",
            VersionAction::SetDefault => "set-default",
        }
    }
}

impl std::fmt::Display for VersionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
