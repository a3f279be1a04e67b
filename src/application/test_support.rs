//! Shared fixtures for application layer tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{
    ArchiveStageRequest, DeployRequest, ProjectConfigRequest, StandardStageRequest, VersionRequest,
};
use crate::domain::ports::{AmbientConfig, AppEngineSdk, SdkError, SdkResult};
use crate::domain::services::ConfigReader;
use crate::domain::value_objects::{ConfigYaml, VersionAction};

use super::stage::StageOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkCall {
    StageStandard(StandardStageRequest),
    StageArchive(ArchiveStageRequest),
    Deploy(DeployRequest),
    DeployConfig(ConfigYaml, ProjectConfigRequest),
    ManageVersion(VersionAction, VersionRequest),
}

/// Records every call; staging writes `staged_files` into the staging directory
#[derive(Default)]
pub struct RecordingSdk {
    pub calls: RefCell<Vec<SdkCall>>,
    pub staged_files: Vec<(String, String)>,
    pub fail_deploy: bool,
}

impl RecordingSdk {
    pub fn staging(files: &[(&str, &str)]) -> Self {
        Self {
            staged_files: files
                .iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SdkCall> {
        self.calls.borrow().clone()
    }

    pub fn deploys(&self) -> Vec<DeployRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SdkCall::Deploy(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn write_staged(&self, staging: &Path) -> SdkResult<()> {
        for (relative, content) in &self.staged_files {
            let path = staging.join(relative);
            let written = path
                .parent()
                .map_or(Ok(()), std::fs::create_dir_all)
                .and_then(|()| std::fs::write(&path, content));
            written.map_err(|e| SdkError::staging(&path, e.to_string()))?;
        }
        Ok(())
    }
}

impl AppEngineSdk for RecordingSdk {
    fn stage_standard(&self, request: &StandardStageRequest) -> SdkResult<()> {
        self.calls
            .borrow_mut()
            .push(SdkCall::StageStandard(request.clone()));
        self.write_staged(&request.staging_directory)
    }

    fn stage_archive(&self, request: &ArchiveStageRequest) -> SdkResult<()> {
        self.calls
            .borrow_mut()
            .push(SdkCall::StageArchive(request.clone()));
        self.write_staged(&request.staging_directory)
    }

    fn deploy(&self, request: &DeployRequest) -> SdkResult<()> {
        self.calls.borrow_mut().push(SdkCall::Deploy(request.clone()));
        if self.fail_deploy {
            return Err(SdkError::CommandFailed {
                command: "gcloud app deploy".to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }

    fn deploy_config(&self, kind: ConfigYaml, request: &ProjectConfigRequest) -> SdkResult<()> {
        self.calls
            .borrow_mut()
            .push(SdkCall::DeployConfig(kind, request.clone()));
        Ok(())
    }

    fn manage_version(&self, action: VersionAction, request: &VersionRequest) -> SdkResult<()> {
        self.calls
            .borrow_mut()
            .push(SdkCall::ManageVersion(action, request.clone()));
        Ok(())
    }
}

pub struct FixedAmbient(pub Option<&'static str>);

impl AmbientConfig for FixedAmbient {
    fn project(&self) -> SdkResult<Option<String>> {
        Ok(self.0.map(str::to_string))
    }
}

pub fn reader(project: Option<&'static str>) -> ConfigReader {
    ConfigReader::new(Arc::new(FixedAmbient(project)))
}

/// app.yaml project: a war plus `src/main/appengine/app.yaml`
pub fn flexible_project(base: &Path) -> StageOptions {
    let artifact = write(base, "target/app-1.0.war", "war");
    write(base, "src/main/appengine/app.yaml", "runtime: java\nenv: flex\n");
    StageOptions::new(base)
        .with_artifact(artifact)
        .with_source_directory(base.join("target/app-1.0"))
}

/// appengine-web.xml project with the given descriptor
pub fn standard_project(base: &Path, descriptor: &str) -> StageOptions {
    let artifact = write(base, "target/app-1.0.war", "war");
    write(base, "target/app-1.0/WEB-INF/appengine-web.xml", descriptor);
    StageOptions::new(base)
        .with_artifact(artifact)
        .with_source_directory(base.join("target/app-1.0"))
}

pub fn write(base: &Path, relative: &str, content: &str) -> PathBuf {
    let path = base.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

pub const DESCRIPTOR: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<appengine-web-app xmlns="http://appengine.google.com/ns/1.0">
  <application>descriptor-project</application>
  <version>descriptor-version</version>
  <threadsafe>true</threadsafe>
</appengine-web-app>
"#;

pub const VM_DESCRIPTOR: &str = r#"<appengine-web-app>
  <application>vm-project</application>
  <vm>true</vm>
</appengine-web-app>
"#;
