//! Stage command handler

use anyhow::Result;

use appengine_deploy::presentation::cli::StageArgs;
use appengine_deploy::presentation::factory::{create_sdk, stage_options};
use appengine_deploy::presentation::{create_renderer, OutputFormat, Workspace};
use appengine_deploy::Stager;

/// Execute the stage command
pub fn cmd_stage(workspace: &Workspace, args: &StageArgs, json: bool) -> Result<()> {
    let options = stage_options(workspace.config(), &workspace.base_dir, args);
    let stager = Stager::for_options(&options)?;
    let sdk = create_sdk(workspace.config());

    stager.stage(&sdk)?;

    let renderer = create_renderer(OutputFormat::from_flag(json), true);
    println!(
        "{}",
        renderer.render_stage(
            stager.staging_directory(),
            stager.environment(),
            stager.skips_packaging()
        )
    );
    Ok(())
}
