//! Deployer
//!
//! Every deploy operation runs the same pipeline:
//! 1. Pick the staging strategy and config processor from the build output
//! 2. Resolve project id (and version) before anything reaches the SDK
//! 3. Stage
//! 4. Collect deployables
//! 5. One SDK deploy call
//!
//! `start` and `set_default` act on a version that is already deployed, so
//! they resolve identifiers and call the SDK without staging.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::application::stage::{Stager, UNSTAGEABLE_PACKAGING};
use crate::domain::entities::{
    AppEngineDescriptor, DeployRequest, ProjectConfigRequest, VersionRequest,
};
use crate::domain::ports::AppEngineSdk;
use crate::domain::services::{ConfigProcessor, ConfigReader};
use crate::domain::value_objects::{
    AppEngineEnvironment, ConfigValue, ConfigYaml, VersionAction,
};
use crate::error::{AppEngineError, AppEngineResult};

use super::options::DeployOptions;
use super::result::DeployResult;

const DEPLOY_FAILED: &str = "App Engine application deployment failed";
const DEPLOY_ALL_FAILED: &str = "Failed to deploy";
const APP_YAML: &str = "app.yaml";
const VERSION_REQUIRED: &str = "Version was not specified. Set version under [deploy] or pass --version.";

/// Stages and deploys through an [`AppEngineSdk`]
pub struct Deployer<S: AppEngineSdk> {
    sdk: S,
    reader: ConfigReader,
}

impl<S: AppEngineSdk> Deployer<S> {
    pub fn new(sdk: S, reader: ConfigReader) -> Self {
        Self { sdk, reader }
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Deploy the staged application
    pub fn deploy(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        let (stager, processor) = self.prepare(options)?;
        if stager.skips_packaging() {
            info!("{}", UNSTAGEABLE_PACKAGING);
            return Ok(DeployResult::skipped());
        }

        let project_id = processor.process_project_id(options.project_id.as_deref())?;
        let version = processor.process_version(options.version.as_deref())?;

        stager.stage(&self.sdk)?;

        let deployables = if options.deployables.is_empty() {
            vec![stager.staging_directory().to_path_buf()]
        } else {
            options.deployables.clone()
        };

        let request = build_request(options, deployables, &project_id, version.clone());
        self.sdk
            .deploy(&request)
            .map_err(|e| AppEngineError::sdk(DEPLOY_FAILED, e))?;

        Ok(DeployResult::deployed(
            project_id,
            version,
            request.deployables().to_vec(),
        ))
    }

    /// Deploy app.yaml together with every config yaml that is present
    pub fn deploy_all(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        let (stager, processor) = self.prepare(options)?;
        if stager.skips_packaging() {
            info!("{}", UNSTAGEABLE_PACKAGING);
            return Ok(DeployResult::skipped());
        }
        if !options.deployables.is_empty() {
            warn!("deployables are ignored when deploying all");
        }

        let project_id = processor.process_project_id(options.project_id.as_deref())?;
        let version = processor.process_version(options.version.as_deref())?;

        stager.stage(&self.sdk)?;

        let app_yaml = locate_app_yaml(&stager, options).ok_or_else(|| {
            AppEngineError::missing_artifact("Failed to deploy all: could not find app.yaml.")
        })?;
        info!("deployAll: Preparing to deploy {}", APP_YAML);

        let config_dir = processor.process_app_engine_directory(
            stager.staging_directory(),
            &options.stage.app_engine_directory,
        );
        let mut deployables = vec![app_yaml];
        deployables.extend(discover_config_yamls(&config_dir));

        let request = build_request(options, deployables, &project_id, version.clone());
        self.sdk
            .deploy(&request)
            .map_err(|e| AppEngineError::sdk(DEPLOY_ALL_FAILED, e))?;

        Ok(DeployResult::deployed(
            project_id,
            version,
            request.deployables().to_vec(),
        ))
    }

    pub fn deploy_cron(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        self.deploy_config(ConfigYaml::Cron, options)
    }

    pub fn deploy_dispatch(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        self.deploy_config(ConfigYaml::Dispatch, options)
    }

    pub fn deploy_dos(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        self.deploy_config(ConfigYaml::Dos, options)
    }

    pub fn deploy_index(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        self.deploy_config(ConfigYaml::Index, options)
    }

    pub fn deploy_queue(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        self.deploy_config(ConfigYaml::Queue, options)
    }

    /// Deploy a single project config yaml; version and bucket do not apply
    pub fn deploy_config(
        &self,
        kind: ConfigYaml,
        options: &DeployOptions,
    ) -> AppEngineResult<DeployResult> {
        let (stager, processor) = self.prepare(options)?;
        if stager.skips_packaging() {
            info!("{}", UNSTAGEABLE_PACKAGING);
            return Ok(DeployResult::skipped());
        }

        let project_id = processor.process_project_id(options.project_id.as_deref())?;

        stager.stage(&self.sdk)?;

        let config_dir = processor.process_app_engine_directory(
            stager.staging_directory(),
            &options.stage.app_engine_directory,
        );
        let yaml = config_dir.join(kind.file_name());
        if !yaml.is_file() {
            return Err(AppEngineError::missing_artifact(format!(
                "Failed to deploy {}: could not find {}.",
                kind,
                yaml.display()
            )));
        }

        let request =
            ProjectConfigRequest::new(config_dir.clone(), project_id.clone(), options.server.clone());
        self.sdk
            .deploy_config(kind, &request)
            .map_err(|e| AppEngineError::sdk(DEPLOY_ALL_FAILED, e))?;

        Ok(DeployResult::deployed(project_id, None, vec![yaml]))
    }

    /// Start serving a deployed version
    pub fn start(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        self.manage_version(VersionAction::Start, options)
    }

    /// Route all traffic of each service to a deployed version
    pub fn set_default(&self, options: &DeployOptions) -> AppEngineResult<DeployResult> {
        self.manage_version(VersionAction::SetDefault, options)
    }

    /// One SDK call per configured service, or one for the default service
    fn manage_version(
        &self,
        action: VersionAction,
        options: &DeployOptions,
    ) -> AppEngineResult<DeployResult> {
        let descriptor = match options.stage.environment() {
            AppEngineEnvironment::Standard => {
                Some(AppEngineDescriptor::load(&options.stage.descriptor_path())?)
            }
            AppEngineEnvironment::Flexible => None,
        };
        let processor = self.processor(descriptor, options);

        let project_id = processor.process_project_id(options.project_id.as_deref())?;
        let unset = matches!(ConfigValue::parse(options.version.as_deref()), ConfigValue::Unset);
        if unset && !options.read_descriptor {
            return Err(AppEngineError::configuration(VERSION_REQUIRED));
        }
        let version = processor
            .process_version(options.version.as_deref())?
            .ok_or_else(|| AppEngineError::configuration(VERSION_REQUIRED))?;

        let services: Vec<Option<String>> = if options.services.is_empty() {
            vec![None]
        } else {
            options.services.iter().cloned().map(Some).collect()
        };
        for service in services {
            info!(
                "{}: version {} of service {}",
                action,
                version,
                service.as_deref().unwrap_or("default")
            );
            let request = VersionRequest::new(
                project_id.clone(),
                version.clone(),
                service,
                options.server.clone(),
            );
            self.sdk
                .manage_version(action, &request)
                .map_err(|e| AppEngineError::sdk(format!("Failed to {} version", action), e))?;
        }

        Ok(DeployResult::deployed(project_id, Some(version), Vec::new()))
    }

    fn prepare(&self, options: &DeployOptions) -> AppEngineResult<(Stager, ConfigProcessor)> {
        let stager = Stager::for_options(&options.stage)?;
        let processor = self.processor(stager.descriptor().cloned(), options);
        Ok((stager, processor))
    }

    fn processor(
        &self,
        descriptor: Option<AppEngineDescriptor>,
        options: &DeployOptions,
    ) -> ConfigProcessor {
        match descriptor {
            Some(descriptor) => ConfigProcessor::descriptor(descriptor, self.reader.clone()),
            None => ConfigProcessor::manifest(self.reader.clone()),
        }
        .with_read_descriptor(options.read_descriptor)
    }
}

fn build_request(
    options: &DeployOptions,
    deployables: Vec<PathBuf>,
    project_id: &str,
    version: Option<String>,
) -> DeployRequest {
    DeployRequest::builder(deployables, project_id)
        .bucket(options.bucket.clone())
        .image_url(options.image_url.clone())
        .promote(options.promote)
        .server(options.server.clone())
        .stop_previous_version(options.stop_previous_version)
        .version(version)
        .build()
}

/// app.yaml in the staged output, else (app.yaml projects) in the source tree
fn locate_app_yaml(stager: &Stager, options: &DeployOptions) -> Option<PathBuf> {
    let staged = stager.staging_directory().join(APP_YAML);
    if staged.is_file() {
        return Some(staged);
    }
    match stager {
        Stager::Manifest(_) => {
            let source = options.stage.app_engine_directory.join(APP_YAML);
            source.is_file().then_some(source)
        }
        Stager::Descriptor(_) => None,
    }
}

/// Config yamls present in `dir`, in deploy order
pub fn discover_config_yamls(dir: &Path) -> Vec<PathBuf> {
    ConfigYaml::ALL
        .iter()
        .map(|kind| dir.join(kind.file_name()))
        .filter(|yaml| yaml.is_file())
        .inspect(|yaml| {
            if let Some(name) = yaml.file_name() {
                info!("deployAll: Preparing to deploy {}", name.to_string_lossy());
            }
        })
        .collect()
}
