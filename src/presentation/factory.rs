//! Use Case Factory
//!
//! Turns configuration plus command-line flags into options, and wires the
//! Cloud SDK into the deployer. This is the dependency injection point for
//! the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{DeployOptions, Deployer, StageOptions};
use crate::config::{Config, LoadedConfig};
use crate::domain::entities::StandardStageFlags;
use crate::domain::services::ConfigReader;
use crate::error::AppEngineResult;
use crate::infrastructure::CloudSdk;

use super::cli::{DeployArgs, StageArgs, VersionArgs};

/// Type alias for the deployer backed by the installed Cloud SDK
pub type ConcreteDeployer = Deployer<CloudSdk>;

/// Configuration for one invocation and the directory relative paths resolve against
#[derive(Debug)]
pub struct Workspace {
    pub base_dir: PathBuf,
    pub loaded: LoadedConfig,
}

impl Workspace {
    pub fn config(&self) -> &Config {
        &self.loaded.config
    }
}

/// Load `--config` when given (base = its directory), else search from `cwd`
pub fn load_workspace(config_path: Option<&Path>, cwd: &Path) -> AppEngineResult<Workspace> {
    match config_path {
        Some(path) => {
            let path = resolve(cwd, path);
            let (config, warnings) = Config::load_with_warnings(&path)?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            Ok(Workspace {
                base_dir,
                loaded: LoadedConfig {
                    config: config.with_env_overrides(),
                    warnings,
                    source: Some(path),
                },
            })
        }
        None => Ok(Workspace {
            base_dir: cwd.to_path_buf(),
            loaded: Config::load_or_default(cwd)?,
        }),
    }
}

/// Staging options; flags win over configuration
pub fn stage_options(config: &Config, base_dir: &Path, args: &StageArgs) -> StageOptions {
    let mut options = StageOptions::new(base_dir);

    let artifact = args
        .artifact
        .as_ref()
        .or(config.project.artifact.as_ref())
        .map(|p| resolve(base_dir, p));

    if let Some(dir) = &config.project.source_directory {
        options = options.with_source_directory(resolve(base_dir, dir));
    } else if let Some(artifact) = &artifact {
        // target/app-1.0.war is exploded into target/app-1.0
        options = options.with_source_directory(artifact.with_extension(""));
    }
    if let Some(artifact) = artifact {
        options = options.with_artifact(artifact);
    }

    let stage = &config.stage;
    if let Some(dir) = args
        .staging_directory
        .as_ref()
        .or(stage.staging_directory.as_ref())
    {
        options = options.with_staging_directory(resolve(base_dir, dir));
    }
    if let Some(dir) = &stage.app_engine_directory {
        options = options.with_app_engine_directory(resolve(base_dir, dir));
    }
    if let Some(dir) = &stage.docker_directory {
        options = options.with_docker_directory(resolve(base_dir, dir));
    }
    if let Some(runtime) = &stage.runtime {
        options = options.with_runtime(runtime.clone());
    }
    if let Some(dockerfile) = &stage.dockerfile {
        options = options.with_dockerfile(resolve(base_dir, dockerfile));
    }
    if let Some(version) = &config.project.compile_target_version {
        options = options.with_compile_target_version(version.clone());
    }

    options
        .with_extra_files_directories(
            stage
                .extra_files_directories
                .iter()
                .map(|d| resolve(base_dir, d))
                .collect(),
        )
        .with_packaging(config.project.packaging.clone())
        .with_standard_flags(StandardStageFlags {
            enable_quickstart: stage.enable_quickstart,
            disable_update_check: stage.disable_update_check,
            enable_jar_splitting: stage.enable_jar_splitting,
            jar_splitting_excludes: stage.jar_splitting_excludes.clone(),
            compile_encoding: stage.compile_encoding.clone(),
            delete_jsps: stage.delete_jsps,
            enable_jar_classes: stage.enable_jar_classes,
            disable_jar_jsps: stage.disable_jar_jsps,
        })
}

/// Deploy options; flags win over configuration
pub fn deploy_options(config: &Config, base_dir: &Path, args: &DeployArgs) -> DeployOptions {
    let deploy = &config.deploy;
    let deployables = if args.deployables.is_empty() {
        &deploy.deployables
    } else {
        &args.deployables
    };

    let mut options = DeployOptions::new(stage_options(config, base_dir, &args.stage))
        .with_deployables(deployables.iter().map(|d| resolve(base_dir, d)).collect())
        .with_read_descriptor(args.read_descriptor || deploy.read_descriptor);

    options.project_id = args.project_id.clone().or_else(|| deploy.project_id.clone());
    options.version = args.version.clone().or_else(|| deploy.version.clone());
    options.bucket = args.bucket.clone().or_else(|| deploy.bucket.clone());
    options.image_url = args.image_url.clone().or_else(|| deploy.image_url.clone());
    options.server = args.server.clone().or_else(|| deploy.server.clone());
    options.promote = args.promote().or(deploy.promote);
    options.stop_previous_version = args
        .stop_previous_version()
        .or(deploy.stop_previous_version);
    options
}

/// Options for start / set-default; `--service` flags replace `[deploy] services`
pub fn version_options(config: &Config, base_dir: &Path, args: &VersionArgs) -> DeployOptions {
    let services = if args.services.is_empty() {
        config.deploy.services.clone()
    } else {
        args.services.clone()
    };
    deploy_options(config, base_dir, &args.clone().into()).with_services(services)
}

/// The Cloud SDK from `[cloud_sdk] home`, else from `gcloud` on `PATH`
pub fn create_sdk(config: &Config) -> CloudSdk {
    CloudSdk::new(config.cloud_sdk.home.clone())
}

/// Create a deployer backed by the Cloud SDK; gcloud also answers `GCLOUD_CONFIG`
pub fn create_deployer(config: &Config) -> ConcreteDeployer {
    let sdk = create_sdk(config);
    let reader = ConfigReader::new(Arc::new(sdk.clone()));
    Deployer::new(sdk, reader)
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
