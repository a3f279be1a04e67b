//! appengine-web.xml descriptor
//!
//! Only the leaves the deploy flow needs are read: the application id, the
//! version and the `vm` flag. The document may or may not
//! declare the `http://appengine.google.com/ns/1.0` namespace.

use std::path::Path;

use crate::error::{AppEngineError, AppEngineResult};

const ROOT_ELEMENT: &str = "appengine-web-app";

/// Parsed view of `WEB-INF/appengine-web.xml`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppEngineDescriptor {
    project_id: Option<String>,
    version: Option<String>,
    vm: bool,
}

impl AppEngineDescriptor {
    /// Read and parse a descriptor file
    pub fn load(path: &Path) -> AppEngineResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AppEngineError::InvalidDescriptor {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::parse(&content).map_err(|message| AppEngineError::InvalidDescriptor {
            file: path.to_path_buf(),
            message,
        })
    }

    pub fn parse(xml: &str) -> Result<Self, String> {
        let document = roxmltree::Document::parse(xml).map_err(|e| e.to_string())?;
        let root = document.root_element();
        if root.tag_name().name() != ROOT_ELEMENT {
            return Err(format!(
                "expected <{}> root element, found <{}>",
                ROOT_ELEMENT,
                root.tag_name().name()
            ));
        }

        let leaf = |name: &str| -> Option<String> {
            root.children()
                .find(|node| node.is_element() && node.tag_name().name() == name)
                .and_then(|node| node.text())
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        Ok(Self {
            project_id: leaf("application"),
            version: leaf("version"),
            vm: leaf("vm").as_deref() == Some("true"),
        })
    }

    /// `<application>`
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// `<version>`
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// `<vm>true</vm>`
    pub fn is_vm(&self) -> bool {
        self.vm
    }
}
