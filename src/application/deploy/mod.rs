//! Deploy Module
//!
//! Orchestrates stage-then-deploy for the application and its config yamls.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `deployer` - Core orchestration (`Deployer`)
//!
//! ## Usage
//!
//! ```ignore
//! use appengine_deploy::application::deploy::{DeployOptions, Deployer};
//!
//! let deployer = Deployer::new(sdk, ConfigReader::new(ambient));
//! let result = deployer.deploy_all(&DeployOptions::new(stage_options))?;
//! ```

mod deployer;
mod options;
mod result;

pub use deployer::{discover_config_yamls, Deployer};
pub use options::DeployOptions;
pub use result::DeployResult;
