//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the deployer with infrastructure dependencies
//! - Logging setup and output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definitions
//! - `factory` - Options from config + flags, deployer wiring (dependency injection)
//! - `logging` - tracing subscriber
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use appengine_deploy::presentation::factory;
//!
//! let workspace = factory::load_workspace(None, &cwd)?;
//! let deployer = factory::create_deployer(workspace.config());
//! let options = factory::deploy_options(workspace.config(), &workspace.base_dir, &args);
//! let result = deployer.deploy_all(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands, ConfigDeployArgs, DeployArgs, StageArgs};
pub use factory::{create_deployer, create_sdk, load_workspace, ConcreteDeployer, Workspace};
pub use logging::init_logging;
pub use output::{create_renderer, OutputFormat, ResultRenderer};
