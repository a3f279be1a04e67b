//! Cloud SDK
//!
//! Implements the `AppEngineSdk` and `AmbientConfig` ports on top of a local
//! Google Cloud SDK installation.
//!
//! ## Structure
//!
//! - `gcloud` - gcloud argv builders and config parsing
//! - `app_cfg` - App Engine standard staging tool argv
//! - `archive` - app.yaml staging (pure file operations)
//! - `process` - subprocess execution with line streaming

mod app_cfg;
mod archive;
mod gcloud;
mod process;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{
    ArchiveStageRequest, DeployRequest, ProjectConfigRequest, StandardStageRequest, VersionRequest,
};
use crate::domain::ports::{
    AmbientConfig, AppEngineSdk, LoggingOutputListener, OutputListener, SdkError, SdkResult,
};
use crate::domain::value_objects::{ConfigYaml, VersionAction};
use crate::infrastructure::fs::copy_file_into;

pub use archive::stage_archive;
pub use gcloud::{config_list_args, deploy_args, deploy_config_args, parse_project, version_args};
pub use process::SdkCommand;

/// A Cloud SDK installation
#[derive(Clone)]
pub struct CloudSdk {
    home: Option<PathBuf>,
    listener: Arc<dyn OutputListener>,
}

impl CloudSdk {
    /// Use `home` when given, else locate the SDK from `gcloud` on `PATH`
    pub fn new(home: Option<PathBuf>) -> Self {
        Self {
            home,
            listener: Arc::new(LoggingOutputListener),
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn OutputListener>) -> Self {
        self.listener = listener;
        self
    }

    /// The SDK root directory
    pub fn home(&self) -> SdkResult<PathBuf> {
        if let Some(home) = &self.home {
            return Ok(home.clone());
        }
        let gcloud = which::which("gcloud").map_err(|e| {
            SdkError::NotInstalled(format!(
                "gcloud is not on PATH ({}); set [cloud_sdk] home in appengine.toml",
                e
            ))
        })?;
        let gcloud = gcloud.canonicalize().unwrap_or(gcloud);
        sdk_root_from_gcloud(&gcloud).ok_or_else(|| {
            SdkError::NotInstalled(format!(
                "cannot derive the Cloud SDK directory from {}",
                gcloud.display()
            ))
        })
    }

    fn gcloud(&self) -> SdkResult<PathBuf> {
        let home = self.home()?;
        let gcloud = gcloud::gcloud_path(&home);
        if !gcloud.is_file() {
            return Err(SdkError::NotInstalled(format!(
                "{} does not exist",
                gcloud.display()
            )));
        }
        Ok(gcloud)
    }

    fn run_gcloud(&self, args: Vec<std::ffi::OsString>) -> SdkResult<()> {
        SdkCommand::new(self.gcloud()?, args).run(self.listener.as_ref())
    }
}

impl std::fmt::Debug for CloudSdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudSdk")
            .field("home", &self.home)
            .finish_non_exhaustive()
    }
}

/// `<root>/bin/gcloud` -> `<root>`
fn sdk_root_from_gcloud(gcloud: &Path) -> Option<PathBuf> {
    gcloud.parent()?.parent().map(Path::to_path_buf)
}

impl AppEngineSdk for CloudSdk {
    fn stage_standard(&self, request: &StandardStageRequest) -> SdkResult<()> {
        let home = self.home()?;
        let jar = app_cfg::tools_jar(&home);
        if !jar.is_file() {
            return Err(SdkError::NotInstalled(format!(
                "{} does not exist; install the app-engine-java component",
                jar.display()
            )));
        }

        SdkCommand::new(app_cfg::java_executable(), app_cfg::stage_args(&home, request))
            .run(self.listener.as_ref())?;

        if let Some(dockerfile) = &request.dockerfile {
            debug!("copying {} into staging", dockerfile.display());
            copy_file_into(dockerfile, &request.staging_directory)
                .map_err(|e| SdkError::staging(dockerfile, e.to_string()))?;
        }
        Ok(())
    }

    fn stage_archive(&self, request: &ArchiveStageRequest) -> SdkResult<()> {
        archive::stage_archive(request)
    }

    fn deploy(&self, request: &DeployRequest) -> SdkResult<()> {
        self.run_gcloud(gcloud::deploy_args(request))
    }

    fn deploy_config(&self, kind: ConfigYaml, request: &ProjectConfigRequest) -> SdkResult<()> {
        self.run_gcloud(gcloud::deploy_config_args(kind, request))
    }

    fn manage_version(&self, action: VersionAction, request: &VersionRequest) -> SdkResult<()> {
        self.run_gcloud(gcloud::version_args(action, request))
    }
}

impl AmbientConfig for CloudSdk {
    fn project(&self) -> SdkResult<Option<String>> {
        let command = SdkCommand::new(self.gcloud()?, gcloud::config_list_args());
        let json = command.capture(self.listener.as_ref())?;
        gcloud::parse_project(&json).map_err(|e| SdkError::InvalidOutput {
            command: command.to_string(),
            message: e.to_string(),
        })
    }
}
