//! gcloud command lines
//!
//! Pure argv builders plus parsing of `gcloud config list --format=json`.

use std::ffi::OsString;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{DeployRequest, ProjectConfigRequest, VersionRequest};
use crate::domain::value_objects::{ConfigYaml, VersionAction};

const DEFAULT_SERVICE: &str = "default";

/// `gcloud app deploy <deployables...> [flags] --project P --quiet`
pub fn deploy_args(request: &DeployRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["app".into(), "deploy".into()];
    args.extend(request.deployables().iter().map(|p| p.as_os_str().to_owned()));

    push_value(&mut args, "--bucket", request.bucket());
    push_value(&mut args, "--image-url", request.image_url());
    push_switch(&mut args, "promote", request.promote());
    push_value(&mut args, "--server", request.server());
    push_switch(&mut args, "stop-previous-version", request.stop_previous_version());
    push_value(&mut args, "--version", request.version());

    push_value(&mut args, "--project", Some(request.project_id()));
    args.push("--quiet".into());
    args
}

/// `gcloud app deploy <dir>/<kind>.yaml [--server S] --project P --quiet`
pub fn deploy_config_args(kind: ConfigYaml, request: &ProjectConfigRequest) -> Vec<OsString> {
    let yaml = request.app_engine_directory().join(kind.file_name());
    let mut args: Vec<OsString> = vec!["app".into(), "deploy".into(), yaml.into_os_string()];
    push_value(&mut args, "--server", request.server());
    push_value(&mut args, "--project", Some(request.project_id()));
    args.push("--quiet".into());
    args
}

/// - start: `gcloud app versions start V --service S [--server S] --project P --quiet`
/// - set-default: `gcloud app services set-traffic S --splits V=1 [--server S] --project P --quiet`
pub fn version_args(action: VersionAction, request: &VersionRequest) -> Vec<OsString> {
    let service = request.service().unwrap_or(DEFAULT_SERVICE);
    let mut args: Vec<OsString> = match action {
        VersionAction::Start => vec![
            "app".into(),
            "versions".into(),
            "start".into(),
            request.version().into(),
            "--service".into(),
            service.into(),
        ],
        VersionAction::SetDefault => vec![
            "app".into(),
            "services".into(),
            "set-traffic".into(),
            service.into(),
            "--splits".into(),
            format!("{}=1", request.version()).into(),
        ],
    };
    push_value(&mut args, "--server", request.server());
    push_value(&mut args, "--project", Some(request.project_id()));
    args.push("--quiet".into());
    args
}

/// `gcloud config list --format=json`
pub fn config_list_args() -> Vec<OsString> {
    vec!["config".into(), "list".into(), "--format=json".into()]
}

fn push_value(args: &mut Vec<OsString>, flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        args.push(flag.into());
        args.push(value.into());
    }
}

fn push_switch(args: &mut Vec<OsString>, name: &str, value: Option<bool>) {
    match value {
        Some(true) => args.push(format!("--{}", name).into()),
        Some(false) => args.push(format!("--no-{}", name).into()),
        None => {}
    }
}

#[derive(Debug, Default, Deserialize)]
struct GcloudConfig {
    #[serde(default)]
    core: CoreSection,
}

#[derive(Debug, Default, Deserialize)]
struct CoreSection {
    #[serde(default)]
    project: Option<String>,
}

/// `core.project` from `gcloud config list --format=json`
pub fn parse_project(json: &str) -> Result<Option<String>, serde_json::Error> {
    let config: GcloudConfig = serde_json::from_str(json)?;
    Ok(config
        .core
        .project
        .map(|project| project.trim().to_string())
        .filter(|project| !project.is_empty()))
}

/// `<home>/bin/gcloud` (with `.cmd` on Windows)
pub fn gcloud_path(home: &Path) -> std::path::PathBuf {
    let name = if cfg!(windows) { "gcloud.cmd" } else { "gcloud" };
    home.join("bin").join(name)
}
