//! Domain Entities
//!
//! Values built once per invocation and handed to the SDK port.
//! - `DeployRequest` - application deploy (deployables + identifiers)
//! - `ProjectConfigRequest` - single config yaml deploy
//! - `VersionRequest` - start or set-default of a deployed version
//! - `StandardStageRequest` / `ArchiveStageRequest` - staging inputs
//! - `AppEngineDescriptor` - parsed `appengine-web.xml`
//! - `AppYaml` - parsed `app.yaml`

mod deploy_request;
mod descriptor;
mod manifest;
mod stage_request;

pub use deploy_request::{
    DeployRequest, DeployRequestBuilder, ProjectConfigRequest, VersionRequest,
};
pub use descriptor::AppEngineDescriptor;
pub use manifest::AppYaml;
pub use stage_request::{ArchiveStageRequest, StandardStageFlags, StandardStageRequest};
