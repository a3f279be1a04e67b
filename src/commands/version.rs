//! start / set-default command handler

use anyhow::Result;

use appengine_deploy::domain::value_objects::VersionAction;
use appengine_deploy::presentation::cli::VersionArgs;
use appengine_deploy::presentation::factory::{create_deployer, version_options};
use appengine_deploy::presentation::{create_renderer, OutputFormat, Workspace};

/// Execute a version command
pub fn cmd_version(
    workspace: &Workspace,
    action: VersionAction,
    args: &VersionArgs,
    json: bool,
) -> Result<()> {
    let options = version_options(workspace.config(), &workspace.base_dir, args);
    let deployer = create_deployer(workspace.config());

    let result = match action {
        VersionAction::Start => deployer.start(&options)?,
        VersionAction::SetDefault => deployer.set_default(&options)?,
    };

    let renderer = create_renderer(OutputFormat::from_flag(json), true);
    println!("{}", renderer.render_deploy(action.name(), &result));
    Ok(())
}
