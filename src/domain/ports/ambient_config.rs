//! AmbientConfig port - configuration persisted by the gcloud CLI

use super::app_engine_sdk::SdkResult;

/// Read-only access to the CLI's persisted configuration
pub trait AmbientConfig {
    /// The configured `core/project`, if any
    fn project(&self) -> SdkResult<Option<String>>;
}

impl<T: AmbientConfig + ?Sized> AmbientConfig for std::sync::Arc<T> {
    fn project(&self) -> SdkResult<Option<String>> {
        (**self).project()
    }
}
