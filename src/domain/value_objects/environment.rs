//! Environment and packaging value objects
//!
//! - `Standard`: the exploded web application carries `WEB-INF/appengine-web.xml`
//! - `Flexible`: anything else; deployment is driven by `app.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Which App Engine flow a build output belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEngineEnvironment {
    /// Descriptor-based (appengine-web.xml)
    Standard,
    /// Manifest-based (app.yaml)
    Flexible,
}

impl AppEngineEnvironment {
    /// Location of the legacy descriptor inside an exploded web application
    pub fn descriptor_path(source_directory: &Path) -> PathBuf {
        source_directory.join("WEB-INF").join("appengine-web.xml")
    }

    /// Detect the environment from the exploded build output
    pub fn detect(source_directory: &Path) -> Self {
        if Self::descriptor_path(source_directory).is_file() {
            AppEngineEnvironment::Standard
        } else {
            AppEngineEnvironment::Flexible
        }
    }
}

impl std::fmt::Display for AppEngineEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppEngineEnvironment::Standard => write!(f, "standard"),
            AppEngineEnvironment::Flexible => write!(f, "flexible"),
        }
    }
}

/// Build packaging of the project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Packaging {
    #[default]
    War,
    Jar,
    Other(String),
}

impl Packaging {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "war" => Packaging::War,
            "jar" => Packaging::Jar,
            other => Packaging::Other(other.to_string()),
        }
    }

    /// Only web and plain archives can be staged from app.yaml
    pub fn is_stageable(&self) -> bool {
        matches!(self, Packaging::War | Packaging::Jar)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Packaging::War => "war",
            Packaging::Jar => "jar",
            Packaging::Other(other) => other,
        }
    }
}

impl std::fmt::Display for Packaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Packaging {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Packaging {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Packaging::parse(&raw))
    }
}
