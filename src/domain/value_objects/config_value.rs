//! ConfigValue value object - an explicit parameter after sentinel parsing
//!
//! Project id and version parameters accept either a literal value or one of
//! two sentinels that redirect resolution to another source:
//!
//! - `APPENGINE_CONFIG`: read the field from `WEB-INF/appengine-web.xml`
//! - `GCLOUD_CONFIG`: read the field from the gcloud CLI's persisted config

/// Sentinel: read from the legacy appengine-web.xml descriptor
pub const APPENGINE_CONFIG: &str = "APPENGINE_CONFIG";

/// Sentinel: read from the ambient gcloud configuration
pub const GCLOUD_CONFIG: &str = "GCLOUD_CONFIG";

/// Parsed form of an explicit project id / version parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Absent or blank
    Unset,
    /// `APPENGINE_CONFIG`
    FromDescriptor,
    /// `GCLOUD_CONFIG`
    FromAmbient,
    /// Any other non-blank value
    Explicit(String),
}

impl ConfigValue {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => ConfigValue::Unset,
            Some(APPENGINE_CONFIG) => ConfigValue::FromDescriptor,
            Some(GCLOUD_CONFIG) => ConfigValue::FromAmbient,
            Some(value) => ConfigValue::Explicit(value.to_string()),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ConfigValue::Unset)
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::Unset => write!(f, "<unset>"),
            ConfigValue::FromDescriptor => write!(f, "{}", APPENGINE_CONFIG),
            ConfigValue::FromAmbient => write!(f, "{}", GCLOUD_CONFIG),
            ConfigValue::Explicit(value) => write!(f, "{}", value),
        }
    }
}
