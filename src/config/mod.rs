//! Configuration module for appengine-deploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APPENGINE_*, DEPLOY_READ_APPENGINE_WEB_XML)
//! 3. Project config (appengine.toml)
//! 4. User config (~/.config/appengine-deploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{CloudSdkConfig, Config, DeployConfig, ProjectConfig, StageConfig};
