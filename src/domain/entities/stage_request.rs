//! Staging requests handed to the SDK port

use std::path::PathBuf;

/// Flags forwarded to the App Engine standard staging tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardStageFlags {
    pub enable_quickstart: bool,
    pub disable_update_check: bool,
    pub enable_jar_splitting: bool,
    pub jar_splitting_excludes: Option<String>,
    pub compile_encoding: Option<String>,
    pub delete_jsps: bool,
    pub enable_jar_classes: bool,
    pub disable_jar_jsps: bool,
}

/// Descriptor-based staging input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardStageRequest {
    /// Exploded web application (contains WEB-INF/appengine-web.xml)
    pub source_directory: PathBuf,
    pub staging_directory: PathBuf,
    pub runtime: Option<String>,
    pub dockerfile: Option<PathBuf>,
    pub flags: StandardStageFlags,
}

/// Manifest-based staging input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveStageRequest {
    /// Directory holding app.yaml
    pub app_engine_directory: PathBuf,
    pub docker_directory: PathBuf,
    /// Built war or jar
    pub artifact: PathBuf,
    pub staging_directory: PathBuf,
    pub extra_files_directories: Vec<PathBuf>,
}
