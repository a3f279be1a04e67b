//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Directory helpers used while staging
//! - `cloud_sdk/` - The Cloud SDK (gcloud, AppCfg) behind `AppEngineSdk` and `AmbientConfig`

pub mod cloud_sdk;
pub mod fs;

// Re-export for convenience
pub use cloud_sdk::{CloudSdk, SdkCommand};
