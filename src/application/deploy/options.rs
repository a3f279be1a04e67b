//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

use crate::application::stage::StageOptions;

/// Options for a deploy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Staging runs before every deploy
    pub stage: StageOptions,
    /// Explicit deployables; empty means the staging directory
    pub deployables: Vec<PathBuf>,
    /// Services targeted by start / set-default; empty means the default service
    pub services: Vec<String>,
    pub bucket: Option<String>,
    pub image_url: Option<String>,
    pub promote: Option<bool>,
    pub server: Option<String>,
    pub stop_previous_version: Option<bool>,
    /// Literal version, `APPENGINE_CONFIG` or `GCLOUD_CONFIG`
    pub version: Option<String>,
    /// Literal project id, `APPENGINE_CONFIG` or `GCLOUD_CONFIG`
    pub project_id: Option<String>,
    /// Take unset project id / version from appengine-web.xml
    pub read_descriptor: bool,
}

impl DeployOptions {
    pub fn new(stage: StageOptions) -> Self {
        Self {
            stage,
            deployables: Vec::new(),
            services: Vec::new(),
            bucket: None,
            image_url: None,
            promote: None,
            server: None,
            stop_previous_version: None,
            version: None,
            project_id: None,
            read_descriptor: false,
        }
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_deployables(mut self, deployables: Vec<PathBuf>) -> Self {
        self.deployables = deployables;
        self
    }

    pub fn with_services(mut self, services: Vec<String>) -> Self {
        self.services = services;
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_promote(mut self, promote: bool) -> Self {
        self.promote = Some(promote);
        self
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn with_stop_previous_version(mut self, stop: bool) -> Self {
        self.stop_previous_version = Some(stop);
        self
    }

    pub fn with_read_descriptor(mut self, read_descriptor: bool) -> Self {
        self.read_descriptor = read_descriptor;
        self
    }
}
