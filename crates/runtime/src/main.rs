#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use runtime::{watcher, Cli, HeadlessPresenter, RunOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.scenario_config()?;
    tracing::debug!("Scenario: {}", serde_json::to_string(&config)?);

    tracing::info!("Initializing block simulation...");
    let mut sim = config.build()?;

    let mut presenter = HeadlessPresenter::new(cli.fps, cli.frames, cli.log_every)?;
    if cli.watch {
        if let Some(path) = &cli.scenario {
            match watcher::start(path) {
                Ok(watcher_instance) => {
                    tracing::info!("Scenario watcher started successfully.");
                    presenter = presenter.with_watcher(watcher_instance);
                }
                Err(e) => {
                    tracing::error!("Failed to start scenario watcher: {e:?}");
                }
            }
        }
    }

    if cli.frames.is_none() && !cli.until_settled {
        tracing::warn!("No frame budget and --until-settled not set; running until interrupted.");
    }

    let options = RunOptions {
        until_settled: cli.until_settled,
        scenario: cli.scenario.clone(),
        overrides: cli.overrides(),
    };
    let summary = runtime::run(&mut sim, &mut presenter, &options)?;

    tracing::info!(
        "Final positions: small x = {}, large x = {} ({} collisions)",
        sim.small().position.x,
        sim.large().position.x,
        summary.collisions
    );

    Ok(())
}
