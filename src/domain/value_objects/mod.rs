//! Domain Value Objects
//!
//! Immutable value types that represent deployment concepts.

mod config_value;
mod config_yaml;
mod environment;
mod version_action;

pub use config_value::{ConfigValue, APPENGINE_CONFIG, GCLOUD_CONFIG};
pub use config_yaml::ConfigYaml;
pub use environment::{AppEngineEnvironment, Packaging};
pub use version_action::VersionAction;
