//! Error types for appengine-deploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::SdkError;

/// Result type alias for library operations
pub type AppEngineResult<T> = Result<T, AppEngineError>;

/// Main error type for staging and deployment
#[derive(Error, Debug)]
pub enum AppEngineError {
    /// A project id or version could not be resolved
    #[error("{message}")]
    Configuration { message: String },

    /// Two configuration sources were requested for the same field
    #[error(
        "Cannot override deploy.{field} with appengine-web.xml. Either remove {field} from \
         the deploy configuration, or clear DEPLOY_READ_APPENGINE_WEB_XML to use it."
    )]
    ConflictingSources { field: &'static str },

    /// An expected manifest, yaml or build artifact is absent
    #[error("{message}")]
    MissingArtifact { message: String },

    /// Filesystem failure while preparing the staging directory
    #[error("failed to prepare staging directory {path}: {source}")]
    StagingIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Cloud SDK call failed
    #[error("{operation}: {source}")]
    SdkInvocation {
        operation: String,
        #[source]
        source: SdkError,
    },

    /// appengine-web.xml could not be read or parsed
    #[error("failed to parse {file}: {message}")]
    InvalidDescriptor { file: PathBuf, message: String },

    /// app.yaml could not be read, parsed or is inconsistent with the Docker context
    #[error("invalid app.yaml {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// appengine.toml could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppEngineError {
    pub fn configuration(message: impl Into<String>) -> Self {
        AppEngineError::Configuration {
            message: message.into(),
        }
    }

    pub fn missing_artifact(message: impl Into<String>) -> Self {
        AppEngineError::MissingArtifact {
            message: message.into(),
        }
    }

    pub fn sdk(operation: impl Into<String>, source: SdkError) -> Self {
        AppEngineError::SdkInvocation {
            operation: operation.into(),
            source,
        }
    }

    pub fn staging_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppEngineError::StagingIo {
            path: path.into(),
            source,
        }
    }

    /// True for missing and conflicting project id / version errors
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AppEngineError::Configuration { .. } | AppEngineError::ConflictingSources { .. }
        )
    }
}
