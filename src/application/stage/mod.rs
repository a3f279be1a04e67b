//! Stage Module
//!
//! Prepares the staging directory before a deploy.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`StageOptions`)
//! - `stager` - Strategy selection and staging (`Stager`)
//!
//! ## Usage
//!
//! ```ignore
//! use appengine_deploy::application::stage::{StageOptions, Stager};
//!
//! let stager = Stager::for_options(&StageOptions::new(base_dir).with_artifact(war))?;
//! stager.stage(&sdk)?;
//! ```

mod options;
mod stager;

pub use options::StageOptions;
pub use stager::{DescriptorStager, ManifestStager, Stager};
pub(crate) use stager::UNSTAGEABLE_PACKAGING;
