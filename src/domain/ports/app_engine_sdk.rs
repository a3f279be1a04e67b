//! AppEngineSdk port - the external deployment SDK
//!
//! Implementations:
//! - `CloudSdk` - shells out to gcloud and the App Engine staging tool
//! - recording mocks in tests

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::{
    ArchiveStageRequest, DeployRequest, ProjectConfigRequest, StandardStageRequest, VersionRequest,
};
use crate::domain::value_objects::{ConfigYaml, VersionAction};

/// Result type for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// Failures reported by the SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// The Cloud SDK (or one of its tools) could not be found
    #[error("Cloud SDK not found: {0}")]
    NotInstalled(String),

    /// The process could not be started
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited unsuccessfully
    #[error("{command} exited with code {}", display_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The process output could not be understood
    #[error("unexpected output from {command}: {message}")]
    InvalidOutput { command: String, message: String },

    /// Staging could not produce the staged application
    #[error("{message}")]
    Staging {
        path: Option<PathBuf>,
        message: String,
    },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "<signal>".to_string(),
    }
}

impl SdkError {
    pub fn staging(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SdkError::Staging {
            path: Some(path.into()),
            message: message.into(),
        }
    }
}

/// The deployment SDK
pub trait AppEngineSdk {
    /// Stage an appengine-web.xml based application
    fn stage_standard(&self, request: &StandardStageRequest) -> SdkResult<()>;

    /// Stage an app.yaml based application
    fn stage_archive(&self, request: &ArchiveStageRequest) -> SdkResult<()>;

    /// Deploy an application (and any config yamls in the deployables list)
    fn deploy(&self, request: &DeployRequest) -> SdkResult<()>;

    /// Deploy a single project config yaml
    fn deploy_config(&self, kind: ConfigYaml, request: &ProjectConfigRequest) -> SdkResult<()>;

    /// Start a deployed version, or make it the service's default
    fn manage_version(&self, action: VersionAction, request: &VersionRequest) -> SdkResult<()>;
}

impl<T: AppEngineSdk + ?Sized> AppEngineSdk for &T {
    fn stage_standard(&self, request: &StandardStageRequest) -> SdkResult<()> {
        (**self).stage_standard(request)
    }

    fn stage_archive(&self, request: &ArchiveStageRequest) -> SdkResult<()> {
        (**self).stage_archive(request)
    }

    fn deploy(&self, request: &DeployRequest) -> SdkResult<()> {
        (**self).deploy(request)
    }

    fn deploy_config(&self, kind: ConfigYaml, request: &ProjectConfigRequest) -> SdkResult<()> {
        (**self).deploy_config(kind, request)
    }

    fn manage_version(&self, action: VersionAction, request: &VersionRequest) -> SdkResult<()> {
        (**self).manage_version(action, request)
    }
}
