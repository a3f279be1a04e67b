//! Archive staging for app.yaml based applications
//!
//! The staged directory is assembled from, in order: the Docker context, the
//! war/jar, each extra files directory, then app.yaml (so app.yaml always
//! wins over a same-named file from an earlier source).

use tracing::debug;

use crate::domain::entities::{AppYaml, ArchiveStageRequest};
use crate::domain::ports::{SdkError, SdkResult};
use crate::infrastructure::fs::{copy_dir_contents, copy_file_into};

const APP_YAML: &str = "app.yaml";
const DOCKERFILE: &str = "Dockerfile";

/// Populate `request.staging_directory`; the directory must already exist
pub fn stage_archive(request: &ArchiveStageRequest) -> SdkResult<()> {
    let staging = &request.staging_directory;
    let app_yaml_path = request.app_engine_directory.join(APP_YAML);
    if !app_yaml_path.is_file() {
        return Err(SdkError::staging(
            &app_yaml_path,
            format!("could not find {}", app_yaml_path.display()),
        ));
    }
    let app_yaml = std::fs::read_to_string(&app_yaml_path)
        .map_err(|e| SdkError::staging(&app_yaml_path, e.to_string()))
        .and_then(|content| {
            AppYaml::parse(&content).map_err(|message| {
                SdkError::staging(&app_yaml_path, format!("invalid app.yaml: {}", message))
            })
        })?;

    let dockerfile = request.docker_directory.join(DOCKERFILE);
    if dockerfile.is_file() {
        if app_yaml.runtime() == Some("java") {
            return Err(SdkError::staging(
                &app_yaml_path,
                "Cannot use a custom Dockerfile with runtime: java. Use runtime: custom",
            ));
        }
        let copied = copy_dir_contents(&request.docker_directory, staging)
            .map_err(|e| SdkError::staging(&request.docker_directory, e.to_string()))?;
        debug!("copied {} files from the Docker context", copied.len());
    } else if app_yaml.is_custom_runtime() {
        return Err(SdkError::staging(
            &dockerfile,
            format!("runtime: custom requires a Dockerfile at {}", dockerfile.display()),
        ));
    }

    copy_file_into(&request.artifact, staging)
        .map_err(|e| SdkError::staging(&request.artifact, e.to_string()))?;

    for extra in &request.extra_files_directories {
        if !extra.is_dir() {
            return Err(SdkError::staging(
                extra,
                format!("extra files directory {} does not exist", extra.display()),
            ));
        }
        copy_dir_contents(extra, staging).map_err(|e| SdkError::staging(extra, e.to_string()))?;
    }

    copy_file_into(&app_yaml_path, staging)
        .map_err(|e| SdkError::staging(&app_yaml_path, e.to_string()))?;
    Ok(())
}
