//! Deploy requests
//!
//! `DeployRequest` is assembled by the deployer after staging and is never
//! mutated afterwards; the builder is the only way to set optional fields.

use std::path::{Path, PathBuf};

/// Input of an application deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    deployables: Vec<PathBuf>,
    bucket: Option<String>,
    image_url: Option<String>,
    promote: Option<bool>,
    server: Option<String>,
    stop_previous_version: Option<bool>,
    version: Option<String>,
    project_id: String,
}

impl DeployRequest {
    pub fn builder(deployables: Vec<PathBuf>, project_id: impl Into<String>) -> DeployRequestBuilder {
        DeployRequestBuilder {
            request: DeployRequest {
                deployables,
                bucket: None,
                image_url: None,
                promote: None,
                server: None,
                stop_previous_version: None,
                version: None,
                project_id: project_id.into(),
            },
        }
    }

    /// Files or directories passed to the deploy, in order
    pub fn deployables(&self) -> &[PathBuf] {
        &self.deployables
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn promote(&self) -> Option<bool> {
        self.promote
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn stop_previous_version(&self) -> Option<bool> {
        self.stop_previous_version
    }

    /// `None` lets App Engine generate a version
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// Builder for [`DeployRequest`]
#[derive(Debug, Clone)]
pub struct DeployRequestBuilder {
    request: DeployRequest,
}

impl DeployRequestBuilder {
    pub fn bucket(mut self, bucket: Option<String>) -> Self {
        self.request.bucket = bucket;
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.request.image_url = image_url;
        self
    }

    pub fn promote(mut self, promote: Option<bool>) -> Self {
        self.request.promote = promote;
        self
    }

    pub fn server(mut self, server: Option<String>) -> Self {
        self.request.server = server;
        self
    }

    pub fn stop_previous_version(mut self, stop: Option<bool>) -> Self {
        self.request.stop_previous_version = stop;
        self
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.request.version = version;
        self
    }

    pub fn build(self) -> DeployRequest {
        self.request
    }
}

/// Input of a single config yaml deploy (cron, dispatch, dos, index, queue)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfigRequest {
    app_engine_directory: PathBuf,
    project_id: String,
    server: Option<String>,
}

impl ProjectConfigRequest {
    pub fn new(
        app_engine_directory: impl Into<PathBuf>,
        project_id: impl Into<String>,
        server: Option<String>,
    ) -> Self {
        Self {
            app_engine_directory: app_engine_directory.into(),
            project_id: project_id.into(),
            server,
        }
    }

    /// Directory holding the config yamls
    pub fn app_engine_directory(&self) -> &Path {
        &self.app_engine_directory
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }
}

/// Targets one version of one service; `service: None` is the default service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRequest {
    project_id: String,
    version: String,
    service: Option<String>,
    server: Option<String>,
}

impl VersionRequest {
    pub fn new(
        project_id: impl Into<String>,
        version: impl Into<String>,
        service: Option<String>,
        server: Option<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            version: version.into(),
            service,
            server,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }
}
