mod cli;
mod config;
mod credential;
mod git;
mod github;
mod http;
mod logger;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use credential::Credential;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logger::init(cli.log_level.into()) {
        eprintln!("Cannot initialize the logger: {:#}", err);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli).await.context("Cannot load the configuration")?;

    let credential = Credential::load().context("Cannot load the access token")?;

    log::info!(
        "Opening pull request on {}/{} from {}",
        config.owner,
        config.repo,
        config.pr_branch
    );
    let output = pipeline::run(&config, &credential)
        .await
        .context("Cannot open the pull request")?;

    log::info!("ref url: {}", output.ref_url);
    log::info!("pull request: {}", output.pull_request_url);

    Ok(())
}
