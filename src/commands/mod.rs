//! Command handlers
//!
//! Each handler loads the workspace, builds options and prints a summary.

mod deploy;
mod stage;
mod version;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use appengine_deploy::domain::value_objects::VersionAction;
use appengine_deploy::presentation::{load_workspace, Cli, Commands, Workspace};

use deploy::{cmd_deploy, DeployCommand};
use stage::cmd_stage;
use version::cmd_version;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let workspace = workspace(cli.config.as_deref(), &cwd)?;
    let json = cli.json;

    match cli.command {
        Commands::Stage(args) => cmd_stage(&workspace, &args, json),
        Commands::Deploy(args) => cmd_deploy(&workspace, DeployCommand::App, &args, json),
        Commands::DeployAll(args) => cmd_deploy(&workspace, DeployCommand::All, &args, json),
        Commands::DeployCron(args) => {
            cmd_deploy(&workspace, DeployCommand::Cron, &args.into(), json)
        }
        Commands::DeployDispatch(args) => {
            cmd_deploy(&workspace, DeployCommand::Dispatch, &args.into(), json)
        }
        Commands::DeployDos(args) => {
            cmd_deploy(&workspace, DeployCommand::Dos, &args.into(), json)
        }
        Commands::DeployIndex(args) => {
            cmd_deploy(&workspace, DeployCommand::Index, &args.into(), json)
        }
        Commands::DeployQueue(args) => {
            cmd_deploy(&workspace, DeployCommand::Queue, &args.into(), json)
        }
        Commands::Start(args) => cmd_version(&workspace, VersionAction::Start, &args, json),
        Commands::SetDefault(args) => {
            cmd_version(&workspace, VersionAction::SetDefault, &args, json)
        }
    }
}

fn workspace(config: Option<&Path>, cwd: &Path) -> Result<Workspace> {
    let workspace = load_workspace(config, cwd)?;
    for w in &workspace.loaded.warnings {
        warn!("{}", w);
    }
    Ok(workspace)
}
