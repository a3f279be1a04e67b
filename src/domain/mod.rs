//! Domain Layer
//!
//! Deployment concepts and the decision logic around them.
//!
//! ## Structure
//!
//! - `entities/` - Requests and parsed descriptors (DeployRequest, AppEngineDescriptor)
//! - `value_objects/` - Immutable value types (ConfigValue, ConfigYaml, AppEngineEnvironment)
//! - `services/` - Identifier resolution (ConfigReader, ConfigProcessor)
//! - `ports/` - Interface definitions for infrastructure (AppEngineSdk, AmbientConfig)
//!
//! ## Design Principles
//!
//! 1. **No process execution** - the SDK and gcloud are only reached through ports
//! 2. **Decide once** - the standard/flexible flow is a tagged variant chosen up front
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
