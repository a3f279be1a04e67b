//! appengine-deploy CLI - stage and deploy App Engine applications
//!
//! Usage: appengine-deploy <COMMAND>
//!
//! Commands:
//!   stage            Stage the application
//!   deploy           Stage and deploy the application
//!   deploy-all       Stage and deploy app.yaml with every config yaml found
//!   deploy-cron      Stage and deploy cron.yaml (also dispatch, dos, index, queue)

mod commands;

use anyhow::Result;
use clap::Parser;

use appengine_deploy::presentation::{init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    commands::run(cli)
}
