//! Stage Options
//!
//! Configuration types for staging. Paths are absolute or relative to the
//! process working directory; the presentation layer resolves them against
//! the project base directory.

use std::path::{Path, PathBuf};

use crate::domain::entities::StandardStageFlags;
use crate::domain::value_objects::{AppEngineEnvironment, Packaging};
use crate::error::{AppEngineError, AppEngineResult};

/// Options for staging an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOptions {
    /// Project base directory
    pub base_dir: PathBuf,
    /// Built war or jar
    pub artifact: Option<PathBuf>,
    /// Exploded web application (checked for WEB-INF/appengine-web.xml)
    pub source_directory: PathBuf,
    /// Output directory; cleared on every stage
    pub staging_directory: PathBuf,
    /// Directory holding app.yaml and the config yamls (app.yaml projects)
    pub app_engine_directory: PathBuf,
    /// Docker build context
    pub docker_directory: PathBuf,
    /// Directories whose contents are copied verbatim into staging
    pub extra_files_directories: Vec<PathBuf>,
    pub packaging: Packaging,
    /// Java release the build compiles for ("1.8", "11", ...)
    pub compile_target_version: Option<String>,
    pub runtime: Option<String>,
    pub dockerfile: Option<PathBuf>,
    pub standard_flags: StandardStageFlags,
}

impl StageOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir: PathBuf = base_dir.into();
        Self {
            source_directory: base_dir.join("target").join("webapp"),
            staging_directory: base_dir.join("target").join("appengine-staging"),
            app_engine_directory: base_dir.join("src").join("main").join("appengine"),
            docker_directory: base_dir.join("src").join("main").join("docker"),
            base_dir,
            artifact: None,
            extra_files_directories: Vec::new(),
            packaging: Packaging::default(),
            compile_target_version: None,
            runtime: None,
            dockerfile: None,
            standard_flags: StandardStageFlags::default(),
        }
    }

    pub fn with_artifact(mut self, artifact: impl Into<PathBuf>) -> Self {
        self.artifact = Some(artifact.into());
        self
    }

    pub fn with_source_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_directory = dir.into();
        self
    }

    pub fn with_staging_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_directory = dir.into();
        self
    }

    pub fn with_app_engine_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.app_engine_directory = dir.into();
        self
    }

    pub fn with_docker_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.docker_directory = dir.into();
        self
    }

    pub fn with_extra_files_directories(mut self, dirs: Vec<PathBuf>) -> Self {
        self.extra_files_directories = dirs;
        self
    }

    pub fn with_packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = packaging;
        self
    }

    pub fn with_compile_target_version(mut self, version: impl Into<String>) -> Self {
        self.compile_target_version = Some(version.into());
        self
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = Some(runtime.into());
        self
    }

    pub fn with_dockerfile(mut self, dockerfile: impl Into<PathBuf>) -> Self {
        self.dockerfile = Some(dockerfile.into());
        self
    }

    pub fn with_standard_flags(mut self, flags: StandardStageFlags) -> Self {
        self.standard_flags = flags;
        self
    }

    /// Location of appengine-web.xml in the exploded web application
    pub fn descriptor_path(&self) -> PathBuf {
        AppEngineEnvironment::descriptor_path(&self.source_directory)
    }

    pub fn environment(&self) -> AppEngineEnvironment {
        AppEngineEnvironment::detect(&self.source_directory)
    }

    /// Dockerfile for standard staging: configured, else the first default that exists
    ///
    /// A configured Dockerfile that is not a file is a configuration error.
    pub fn resolve_dockerfile(&self) -> AppEngineResult<Option<PathBuf>> {
        if let Some(dockerfile) = &self.dockerfile {
            if !dockerfile.is_file() {
                return Err(AppEngineError::configuration(format!(
                    "Configured dockerfile {} does not exist",
                    dockerfile.display()
                )));
            }
            return Ok(Some(dockerfile.clone()));
        }
        Ok([
            self.base_dir.join("src/main/docker/Dockerfile"),
            self.base_dir.join("src/main/webapp/Dockerfile"),
        ]
        .into_iter()
        .find(|candidate| candidate.is_file()))
    }

    pub fn artifact_exists(&self) -> bool {
        self.artifact.as_deref().is_some_and(Path::exists)
    }
}
