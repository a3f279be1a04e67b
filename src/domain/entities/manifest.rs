//! app.yaml manifest
//!
//! Staging only needs to know the runtime; every other key is passed through
//! to gcloud untouched.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AppEngineError, AppEngineResult};

/// Parsed view of `app.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppYaml {
    #[serde(default)]
    pub runtime: Option<String>,
}

impl AppYaml {
    pub fn load(path: &Path) -> AppEngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|message| AppEngineError::InvalidManifest {
            file: path.to_path_buf(),
            message,
        })
    }

    /// Parse a manifest; an empty document is accepted as an empty mapping
    pub fn parse(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| e.to_string())
    }

    pub fn runtime(&self) -> Option<&str> {
        self.runtime.as_deref()
    }

    pub fn is_custom_runtime(&self) -> bool {
        self.runtime() == Some("custom")
    }
}
