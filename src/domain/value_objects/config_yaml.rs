//! ConfigYaml value object - the auxiliary configuration artifacts
//!
//! App Engine accepts five project-level configuration files next to the
//! application manifest. `ALL` lists them in deploy order.

use serde::{Deserialize, Serialize};

/// Auxiliary project configuration artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigYaml {
    Cron,
    Dispatch,
    Dos,
    Index,
    Queue,
}

impl ConfigYaml {
    /// Every config yaml, in the order they are passed to a combined deploy
    pub const ALL: [ConfigYaml; 5] = [
        ConfigYaml::Cron,
        ConfigYaml::Dispatch,
        ConfigYaml::Dos,
        ConfigYaml::Index,
        ConfigYaml::Queue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigYaml::Cron => "cron",
            ConfigYaml::Dispatch => "dispatch",
            ConfigYaml::Dos => "dos",
            ConfigYaml::Index => "index",
            ConfigYaml::Queue => "queue",
        }
    }

    /// File name looked up in the config directory (`cron.yaml`, ...)
    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigYaml::Cron => "cron.yaml",
            ConfigYaml::Dispatch => "dispatch.yaml",
            ConfigYaml::Dos => "dos.yaml",
            ConfigYaml::Index => "index.yaml",
            ConfigYaml::Queue => "queue.yaml",
        }
    }
}

impl std::fmt::Display for ConfigYaml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
