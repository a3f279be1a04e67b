//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod ambient_config;
pub mod app_engine_sdk;
pub mod output_listener;

pub use ambient_config::AmbientConfig;
pub use app_engine_sdk::{AppEngineSdk, SdkError, SdkResult};
pub use output_listener::{LoggingOutputListener, NoopOutputListener, OutputListener};
