//! Stager
//!
//! Picks the staging strategy once, from the presence of
//! `WEB-INF/appengine-web.xml` in the exploded build output, and runs it:
//! 1. Clear the staging directory
//! 2. Build the SDK staging request
//! 3. Hand it to the SDK

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::{
    AppEngineDescriptor, AppYaml, ArchiveStageRequest, StandardStageRequest,
};
use crate::domain::ports::AppEngineSdk;
use crate::domain::value_objects::AppEngineEnvironment;
use crate::error::{AppEngineError, AppEngineResult};
use crate::infrastructure::fs::clear_directory;

use super::options::StageOptions;

const NOT_PACKAGED: &str =
    "Could not determine appengine environment, did you package your application?";

pub(crate) const UNSTAGEABLE_PACKAGING: &str =
    "Stage/deploy is only executed for war and jar modules.";

/// Staging strategy for one invocation
#[derive(Debug, Clone)]
pub enum Stager {
    /// appengine-web.xml based (standard environment)
    Descriptor(DescriptorStager),
    /// app.yaml based (flexible environment)
    Manifest(ManifestStager),
}

impl Stager {
    /// Select the strategy for the given build output
    pub fn for_options(options: &StageOptions) -> AppEngineResult<Self> {
        let artifact = match &options.artifact {
            Some(artifact) if options.artifact_exists() => artifact.clone(),
            _ => return Err(AppEngineError::missing_artifact(NOT_PACKAGED)),
        };

        match options.environment() {
            AppEngineEnvironment::Standard => {
                let descriptor = AppEngineDescriptor::load(&options.descriptor_path())?;
                Ok(Stager::Descriptor(DescriptorStager {
                    options: options.clone(),
                    descriptor,
                }))
            }
            AppEngineEnvironment::Flexible => Ok(Stager::Manifest(ManifestStager {
                options: options.clone(),
                artifact,
            })),
        }
    }

    pub fn environment(&self) -> AppEngineEnvironment {
        match self {
            Stager::Descriptor(_) => AppEngineEnvironment::Standard,
            Stager::Manifest(_) => AppEngineEnvironment::Flexible,
        }
    }

    /// The parsed appengine-web.xml, for descriptor-based projects
    pub fn descriptor(&self) -> Option<&AppEngineDescriptor> {
        match self {
            Stager::Descriptor(stager) => Some(&stager.descriptor),
            Stager::Manifest(_) => None,
        }
    }

    pub fn options(&self) -> &StageOptions {
        match self {
            Stager::Descriptor(stager) => &stager.options,
            Stager::Manifest(stager) => &stager.options,
        }
    }

    /// app.yaml projects whose packaging is neither war nor jar are left alone
    pub fn skips_packaging(&self) -> bool {
        match self {
            Stager::Descriptor(_) => false,
            Stager::Manifest(stager) => !stager.options.packaging.is_stageable(),
        }
    }

    pub fn staging_directory(&self) -> &Path {
        &self.options().staging_directory
    }

    pub fn stage<S: AppEngineSdk + ?Sized>(&self, sdk: &S) -> AppEngineResult<()> {
        match self {
            Stager::Descriptor(stager) => stager.stage(sdk),
            Stager::Manifest(stager) => stager.stage(sdk),
        }
    }
}

/// Stages an exploded web application through the standard staging tool
#[derive(Debug, Clone)]
pub struct DescriptorStager {
    options: StageOptions,
    descriptor: AppEngineDescriptor,
}

impl DescriptorStager {
    pub fn stage<S: AppEngineSdk + ?Sized>(&self, sdk: &S) -> AppEngineResult<()> {
        let staging = &self.options.staging_directory;
        let request = StandardStageRequest {
            source_directory: self.options.source_directory.clone(),
            staging_directory: staging.clone(),
            runtime: self.runtime()?,
            dockerfile: self.options.resolve_dockerfile()?,
            flags: self.options.standard_flags.clone(),
        };

        clear_directory(staging).map_err(|e| AppEngineError::staging_io(staging, e))?;

        info!("Staging the application to: {}", staging.display());
        info!("Detected App Engine standard environment application.");

        sdk.stage_standard(&request)
            .map_err(|e| AppEngineError::sdk("Failed to stage the application", e))
    }

    /// Compat projects targeting Java 8+ with `<vm>true</vm>` run on `java`
    pub fn runtime(&self) -> AppEngineResult<Option<String>> {
        if self.descriptor.is_vm()
            && targets_newer_than_java7(self.options.compile_target_version.as_deref())?
        {
            return Ok(Some("java".to_string()));
        }
        Ok(self.options.runtime.clone())
    }
}

/// Stages a war/jar next to its app.yaml and Docker context
#[derive(Debug, Clone)]
pub struct ManifestStager {
    options: StageOptions,
    artifact: PathBuf,
}

impl ManifestStager {
    pub fn stage<S: AppEngineSdk + ?Sized>(&self, sdk: &S) -> AppEngineResult<()> {
        if !self.options.packaging.is_stageable() {
            info!("{}", UNSTAGEABLE_PACKAGING);
            return Ok(());
        }

        let app_yaml = self.options.app_engine_directory.join("app.yaml");
        if !app_yaml.is_file() {
            return Err(AppEngineError::missing_artifact(format!(
                "could not find app.yaml in {}",
                self.options.app_engine_directory.display()
            )));
        }
        AppYaml::load(&app_yaml)?;

        let staging = &self.options.staging_directory;
        clear_directory(staging).map_err(|e| AppEngineError::staging_io(staging, e))?;

        info!("Staging the application to: {}", staging.display());
        info!("Detected App Engine app.yaml based application.");

        let request = ArchiveStageRequest {
            app_engine_directory: self.options.app_engine_directory.clone(),
            docker_directory: self.options.docker_directory.clone(),
            artifact: self.artifact.clone(),
            staging_directory: staging.clone(),
            extra_files_directories: self.options.extra_files_directories.clone(),
        };

        sdk.stage_archive(&request)
            .map_err(|e| AppEngineError::sdk("Failed to stage the application", e))
    }
}

fn targets_newer_than_java7(version: Option<&str>) -> AppEngineResult<bool> {
    let Some(version) = version else {
        return Ok(false);
    };
    let parsed: f32 = version.trim().parse().map_err(|_| {
        AppEngineError::configuration(format!(
            "Invalid compile target version '{}'",
            version
        ))
    })?;
    Ok(parsed > 1.7)
}
