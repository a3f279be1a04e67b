//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Talks to the Cloud SDK only through the `AppEngineSdk` port
//!
//! ## Use Cases
//!
//! - `Stager` - Clears and populates the staging directory
//! - `Deployer` - Stage-then-deploy for the application and its config yamls

pub mod deploy;
pub mod stage;

#[cfg(test)]
pub(crate) mod test_support;

pub use deploy::{discover_config_yamls, DeployOptions, DeployResult, Deployer};
pub use stage::{DescriptorStager, ManifestStager, StageOptions, Stager};
