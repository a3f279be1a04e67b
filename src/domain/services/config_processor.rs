//! ConfigProcessor - resolves project id, version and the config yaml directory
//!
//! | read_descriptor | explicit            | project id / version                 |
//! |-----------------|---------------------|--------------------------------------|
//! | off             | literal             | literal                              |
//! | off             | `APPENGINE_CONFIG`  | appengine-web.xml                    |
//! | off             | `GCLOUD_CONFIG`     | gcloud config / service-generated    |
//! | off             | unset               | error                                |
//! | on              | unset, `APPENGINE_CONFIG` | appengine-web.xml              |
//! | on              | anything else       | conflict error                       |

use std::path::{Path, PathBuf};

use crate::domain::entities::AppEngineDescriptor;
use crate::domain::value_objects::ConfigValue;
use crate::error::{AppEngineError, AppEngineResult};

use super::config_reader::ConfigReader;

const PROJECT_ERROR: &str = "Deployment project_id must be defined or configured to read from system state\n\
1. Set project_id = \"my-project-name\" under [deploy]\n\
2. Set project_id = \"GCLOUD_CONFIG\" to use the project from gcloud config\n\
3. Set project_id = \"APPENGINE_CONFIG\" to use <application> from appengine-web.xml";

const VERSION_ERROR: &str = "Deployment version must be defined or configured to read from system state\n\
1. Set version = \"my-version\" under [deploy]\n\
2. Set version = \"GCLOUD_CONFIG\" to have App Engine generate a version\n\
3. Set version = \"APPENGINE_CONFIG\" to use <version> from appengine-web.xml";

const DESCRIPTOR_ONLY: &str =
    "APPENGINE_CONFIG and DEPLOY_READ_APPENGINE_WEB_XML are only valid for appengine-web.xml based projects";

/// Which flow the processor resolves for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFlow {
    /// appengine-web.xml based; the parsed descriptor is kept for lookups
    Descriptor(AppEngineDescriptor),
    /// app.yaml based
    Manifest,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    ProjectId,
    Version,
}

impl Field {
    fn key(self) -> &'static str {
        match self {
            Field::ProjectId => "project_id",
            Field::Version => "version",
        }
    }
}

/// Resolves deploy identifiers for one flow
#[derive(Debug, Clone)]
pub struct ConfigProcessor {
    flow: ConfigFlow,
    reader: ConfigReader,
    read_descriptor: bool,
}

impl ConfigProcessor {
    pub fn descriptor(descriptor: AppEngineDescriptor, reader: ConfigReader) -> Self {
        Self {
            flow: ConfigFlow::Descriptor(descriptor),
            reader,
            read_descriptor: false,
        }
    }

    pub fn manifest(reader: ConfigReader) -> Self {
        Self {
            flow: ConfigFlow::Manifest,
            reader,
            read_descriptor: false,
        }
    }

    /// Let appengine-web.xml values stand in for unset deploy parameters
    pub fn with_read_descriptor(mut self, read_descriptor: bool) -> Self {
        self.read_descriptor = read_descriptor;
        self
    }

    /// Resolve the project id; never empty
    pub fn process_project_id(&self, explicit: Option<&str>) -> AppEngineResult<String> {
        match self.effective_value(Field::ProjectId, explicit)? {
            ConfigValue::Explicit(project) => Ok(project),
            ConfigValue::FromDescriptor => {
                let descriptor = self.descriptor_or_err()?;
                self.reader.descriptor_project_id(descriptor)
            }
            ConfigValue::FromAmbient => self.reader.project_id(),
            ConfigValue::Unset => Err(AppEngineError::configuration(PROJECT_ERROR)),
        }
    }

    /// Resolve the version; `None` means App Engine generates one
    pub fn process_version(&self, explicit: Option<&str>) -> AppEngineResult<Option<String>> {
        match self.effective_value(Field::Version, explicit)? {
            ConfigValue::Explicit(version) => Ok(Some(version)),
            ConfigValue::FromDescriptor => self
                .descriptor_or_err()?
                .version()
                .map(|version| Some(version.to_string()))
                .ok_or_else(|| {
                    AppEngineError::configuration("<version> was not found in appengine-web.xml")
                }),
            ConfigValue::FromAmbient => Ok(None),
            ConfigValue::Unset => Err(AppEngineError::configuration(VERSION_ERROR)),
        }
    }

    /// Directory expected to hold cron.yaml, dispatch.yaml, ...
    ///
    /// The standard staging tool generates them from WEB-INF xml files into
    /// the staged application; app.yaml projects keep them in the source tree.
    pub fn process_app_engine_directory(
        &self,
        staging_directory: &Path,
        app_engine_directory: &Path,
    ) -> PathBuf {
        match self.flow {
            ConfigFlow::Descriptor(_) => staging_directory
                .join("WEB-INF")
                .join("appengine-generated"),
            ConfigFlow::Manifest => app_engine_directory.to_path_buf(),
        }
    }

    fn effective_value(&self, field: Field, explicit: Option<&str>) -> AppEngineResult<ConfigValue> {
        let value = ConfigValue::parse(explicit);
        if !self.read_descriptor {
            return Ok(value);
        }
        match value {
            ConfigValue::Unset | ConfigValue::FromDescriptor => Ok(ConfigValue::FromDescriptor),
            ConfigValue::Explicit(_) | ConfigValue::FromAmbient => {
                Err(AppEngineError::ConflictingSources { field: field.key() })
            }
        }
    }

    fn descriptor_or_err(&self) -> AppEngineResult<&AppEngineDescriptor> {
        match &self.flow {
            ConfigFlow::Descriptor(descriptor) => Ok(descriptor),
            ConfigFlow::Manifest => Err(AppEngineError::configuration(DESCRIPTOR_ONLY)),
        }
    }
}
