//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--verbose, --quiet, --json, --config) are inherited by all subcommands
//! - Flags override `appengine.toml` and `APPENGINE_*` variables

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// appengine-deploy - stage and deploy App Engine applications
#[derive(Parser, Debug)]
#[command(name = "appengine-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: ./appengine.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage the application into the staging directory
    Stage(StageArgs),

    /// Stage and deploy the application
    Deploy(DeployArgs),

    /// Stage and deploy the application with every config yaml found
    DeployAll(DeployArgs),

    /// Stage and deploy cron.yaml
    DeployCron(ConfigDeployArgs),

    /// Stage and deploy dispatch.yaml
    DeployDispatch(ConfigDeployArgs),

    /// Stage and deploy dos.yaml
    DeployDos(ConfigDeployArgs),

    /// Stage and deploy index.yaml
    DeployIndex(ConfigDeployArgs),

    /// Stage and deploy queue.yaml
    DeployQueue(ConfigDeployArgs),

    /// Start serving a deployed version
    Start(VersionArgs),

    /// Route all traffic to a deployed version
    SetDefault(VersionArgs),
}

/// Staging flags shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StageArgs {
    /// Staging directory (cleared before staging)
    #[arg(long, value_name = "DIR")]
    pub staging_directory: Option<PathBuf>,

    /// Built war or jar
    #[arg(long, value_name = "FILE")]
    pub artifact: Option<PathBuf>,
}

/// Flags for application deploys
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployArgs {
    #[command(flatten)]
    pub stage: StageArgs,

    /// Project id, APPENGINE_CONFIG or GCLOUD_CONFIG
    #[arg(long, value_name = "ID")]
    pub project_id: Option<String>,

    /// Version, APPENGINE_CONFIG or GCLOUD_CONFIG
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Cloud Storage bucket for staged files
    #[arg(long)]
    pub bucket: Option<String>,

    /// Deploy a prebuilt container image
    #[arg(long)]
    pub image_url: Option<String>,

    /// Route all traffic to the new version
    #[arg(long, overrides_with = "no_promote")]
    pub promote: bool,

    /// Keep traffic on the current version
    #[arg(long, overrides_with = "promote")]
    pub no_promote: bool,

    /// App Engine server to connect to
    #[arg(long)]
    pub server: Option<String>,

    /// Stop the previously running version
    #[arg(long, overrides_with = "no_stop_previous_version")]
    pub stop_previous_version: bool,

    /// Leave the previously running version serving
    #[arg(long, overrides_with = "stop_previous_version")]
    pub no_stop_previous_version: bool,

    /// File or directory to deploy instead of the staging directory (repeatable)
    #[arg(long = "deployable", value_name = "PATH")]
    pub deployables: Vec<PathBuf>,

    /// Take unset project id and version from appengine-web.xml
    #[arg(long)]
    pub read_descriptor: bool,
}

impl DeployArgs {
    pub fn promote(&self) -> Option<bool> {
        tri_state(self.promote, self.no_promote)
    }

    pub fn stop_previous_version(&self) -> Option<bool> {
        tri_state(self.stop_previous_version, self.no_stop_previous_version)
    }
}

/// Flags for config yaml deploys
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDeployArgs {
    #[command(flatten)]
    pub stage: StageArgs,

    /// Project id, APPENGINE_CONFIG or GCLOUD_CONFIG
    #[arg(long, value_name = "ID")]
    pub project_id: Option<String>,

    /// App Engine server to connect to
    #[arg(long)]
    pub server: Option<String>,

    /// Take an unset project id from appengine-web.xml
    #[arg(long)]
    pub read_descriptor: bool,
}

impl From<ConfigDeployArgs> for DeployArgs {
    fn from(args: ConfigDeployArgs) -> Self {
        DeployArgs {
            stage: args.stage,
            project_id: args.project_id,
            server: args.server,
            read_descriptor: args.read_descriptor,
            ..DeployArgs::default()
        }
    }
}

/// Flags for operations on an already deployed version
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionArgs {
    #[command(flatten)]
    pub stage: StageArgs,

    /// Project id, APPENGINE_CONFIG or GCLOUD_CONFIG
    #[arg(long, value_name = "ID")]
    pub project_id: Option<String>,

    /// Version, or APPENGINE_CONFIG
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Service to act on (repeatable; default: the default service)
    #[arg(long = "service", value_name = "NAME")]
    pub services: Vec<String>,

    /// App Engine server to connect to
    #[arg(long)]
    pub server: Option<String>,

    /// Take unset project id and version from appengine-web.xml
    #[arg(long)]
    pub read_descriptor: bool,
}

impl From<VersionArgs> for DeployArgs {
    fn from(args: VersionArgs) -> Self {
        DeployArgs {
            stage: args.stage,
            project_id: args.project_id,
            version: args.version,
            server: args.server,
            read_descriptor: args.read_descriptor,
            ..DeployArgs::default()
        }
    }
}

fn tri_state(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
