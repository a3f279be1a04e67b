//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Packaging;
use crate::error::AppEngineResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// `[project]` - what the build produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Built war or jar
    #[serde(default)]
    pub artifact: Option<PathBuf>,

    /// Exploded web application; defaults to the artifact path without extension
    #[serde(default)]
    pub source_directory: Option<PathBuf>,

    #[serde(default)]
    pub packaging: Packaging,

    /// Java release the build targets ("1.8", "11", ...)
    #[serde(default)]
    pub compile_target_version: Option<String>,
}

/// `[stage]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    #[serde(default)]
    pub staging_directory: Option<PathBuf>,

    #[serde(default)]
    pub app_engine_directory: Option<PathBuf>,

    #[serde(default)]
    pub docker_directory: Option<PathBuf>,

    #[serde(default)]
    pub extra_files_directories: Vec<PathBuf>,

    #[serde(default)]
    pub runtime: Option<String>,

    #[serde(default)]
    pub dockerfile: Option<PathBuf>,

    #[serde(default)]
    pub enable_quickstart: bool,

    #[serde(default)]
    pub disable_update_check: bool,

    #[serde(default)]
    pub enable_jar_splitting: bool,

    #[serde(default)]
    pub jar_splitting_excludes: Option<String>,

    #[serde(default)]
    pub compile_encoding: Option<String>,

    #[serde(default)]
    pub delete_jsps: bool,

    #[serde(default)]
    pub enable_jar_classes: bool,

    #[serde(default)]
    pub disable_jar_jsps: bool,
}

/// `[deploy]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Literal, `APPENGINE_CONFIG` or `GCLOUD_CONFIG`
    #[serde(default)]
    pub project_id: Option<String>,

    /// Literal, `APPENGINE_CONFIG` or `GCLOUD_CONFIG`
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub bucket: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub promote: Option<bool>,

    #[serde(default)]
    pub server: Option<String>,

    #[serde(default)]
    pub stop_previous_version: Option<bool>,

    #[serde(default)]
    pub deployables: Vec<PathBuf>,

    /// Services for `start` and `set-default`; empty means the default service
    #[serde(default)]
    pub services: Vec<String>,

    /// Take unset project id / version from appengine-web.xml
    #[serde(default)]
    pub read_descriptor: bool,
}

/// `[cloud_sdk]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSdkConfig {
    /// SDK root; located from `gcloud` on PATH when unset
    #[serde(default)]
    pub home: Option<PathBuf>,
}

/// Main configuration structure (`appengine.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub stage: StageConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub cloud_sdk: CloudSdkConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AppEngineResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: &Path) -> AppEngineResult<LoadedConfig> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (APPENGINE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
