//! Deploy command handlers
//!
//! `deploy`, `deploy-all` and the five config yaml deploys share one path.

use anyhow::Result;

use appengine_deploy::presentation::cli::DeployArgs;
use appengine_deploy::presentation::factory::{create_deployer, deploy_options};
use appengine_deploy::presentation::{create_renderer, OutputFormat, Workspace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployCommand {
    App,
    All,
    Cron,
    Dispatch,
    Dos,
    Index,
    Queue,
}

impl DeployCommand {
    /// Operation name used in summaries
    fn operation(self) -> &'static str {
        match self {
            Self::App => "deploy",
            Self::All => "deployAll",
            Self::Cron => "deployCron",
            Self::Dispatch => "deployDispatch",
            Self::Dos => "deployDos",
            Self::Index => "deployIndex",
            Self::Queue => "deployQueue",
        }
    }
}

/// Execute a deploy command
pub fn cmd_deploy(
    workspace: &Workspace,
    command: DeployCommand,
    args: &DeployArgs,
    json: bool,
) -> Result<()> {
    let options = deploy_options(workspace.config(), &workspace.base_dir, args);
    let deployer = create_deployer(workspace.config());

    let result = match command {
        DeployCommand::App => deployer.deploy(&options)?,
        DeployCommand::All => deployer.deploy_all(&options)?,
        DeployCommand::Cron => deployer.deploy_cron(&options)?,
        DeployCommand::Dispatch => deployer.deploy_dispatch(&options)?,
        DeployCommand::Dos => deployer.deploy_dos(&options)?,
        DeployCommand::Index => deployer.deploy_index(&options)?,
        DeployCommand::Queue => deployer.deploy_queue(&options)?,
    };

    let renderer = create_renderer(OutputFormat::from_flag(json), true);
    println!("{}", renderer.render_deploy(command.operation(), &result));
    Ok(())
}
