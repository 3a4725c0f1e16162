//! Wayfarer CLI application.
//!
//! Command-line interface for the wayfarer travel planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfarer_core::StoreBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { data_file, no_color, command } = Args::parse();

    let store = StoreBuilder::new()
        .with_data_path(data_file)
        .build()
        .await
        .context("Failed to open the data store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Wayfarer started");

    let cli = Cli::new(store.clone(), renderer);
    let outcome = match command {
        Some(Commands::Plan(args)) => cli.generate_plan(args.into()),
        Some(Commands::Place { command }) => cli.handle_place_command(command),
        Some(Commands::Offer { command }) => cli.handle_offer_command(command),
        Some(Commands::Stats(args)) => cli.stats(&args),
        None => cli.list_offers(),
    };

    // Commit any still-debounced mutations before reporting the outcome.
    store.flush().context("Failed to persist the data store")?;

    outcome
}
