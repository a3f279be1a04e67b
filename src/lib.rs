//! appengine-deploy - stage and deploy Java applications to Google App Engine
//!
//! Detects whether a build targets the standard environment
//! (`WEB-INF/appengine-web.xml`) or the flexible environment (`app.yaml`),
//! stages it, resolves project id and version from configuration, the
//! descriptor or gcloud, and drives the Cloud SDK to deploy the application
//! and its config yamls (cron, dispatch, dos, index, queue).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployResult, Deployer, StageOptions, Stager};
pub use config::Config;
pub use domain::ports::{AmbientConfig, AppEngineSdk, SdkError};
pub use domain::value_objects::{ConfigYaml, APPENGINE_CONFIG, GCLOUD_CONFIG};
pub use error::{AppEngineError, AppEngineResult};
pub use infrastructure::CloudSdk;
