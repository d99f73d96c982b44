//! Strictly Grid - terminal game
//!
//! Generalized tic-tac-toe for 2-3 human or computer players.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use strictly_grid_cli::{Cli, MoveLog, Orchestrator, Prompter, Settings, configure};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    run(cli)
}

#[instrument(skip_all, fields(config_path = %cli.config.display()))]
fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_or_default(&cli.config)?.with_overrides(&cli);

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    prompter.banner()?;

    let engine = configure(&settings, &mut prompter)?;
    let log = MoveLog::create(settings.log_file())?;
    let rng = match settings.seed() {
        Some(seed) => {
            info!(seed, "Seeding computer players");
            StdRng::seed_from_u64(*seed)
        }
        None => StdRng::from_entropy(),
    };

    let outcome = Orchestrator::new(engine, prompter, log, rng).run()?;
    info!(%outcome, "Finished");
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
