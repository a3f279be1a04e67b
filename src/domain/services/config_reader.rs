//! ConfigReader - reads the project id from implicit sources

use std::sync::Arc;

use crate::domain::entities::AppEngineDescriptor;
use crate::domain::ports::AmbientConfig;
use crate::error::{AppEngineError, AppEngineResult};

/// Reads the project id from the descriptor or the gcloud config
#[derive(Clone)]
pub struct ConfigReader {
    ambient: Arc<dyn AmbientConfig>,
}

impl ConfigReader {
    pub fn new(ambient: Arc<dyn AmbientConfig>) -> Self {
        Self { ambient }
    }

    /// Project id from the gcloud CLI's persisted config
    pub fn project_id(&self) -> AppEngineResult<String> {
        let project = self
            .ambient
            .project()
            .map_err(|e| AppEngineError::sdk("Failed to read gcloud config", e))?;

        match project {
            Some(project) if !project.trim().is_empty() => Ok(project.trim().to_string()),
            _ => Err(AppEngineError::configuration(
                "Project was not found in gcloud config",
            )),
        }
    }

    /// Project id from appengine-web.xml
    pub fn descriptor_project_id(&self, descriptor: &AppEngineDescriptor) -> AppEngineResult<String> {
        descriptor
            .project_id()
            .map(str::to_string)
            .ok_or_else(|| {
                AppEngineError::configuration("<application> was not found in appengine-web.xml")
            })
    }
}

impl std::fmt::Debug for ConfigReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigReader").finish_non_exhaustive()
    }
}
