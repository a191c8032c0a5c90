use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use shopping_cart_cli::{
    cli::{open_cart, Args, CliApp, TerminalPrompt},
    services::CartService,
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path),
        None => Config::from_env(),
    }
    .context("Failed to load configuration")?;

    let filter = if args.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    tracing::info!("🛒 Shopping cart starting...");

    let mut prompt = TerminalPrompt::new();
    let cart = open_cart(
        &mut prompt,
        &mut io::stdout(),
        args.owner.or(config.owner),
        args.date.or(config.date_label),
    )?;

    let mut service = CartService::new(cart);
    if args.demo || config.seed_sample_items {
        service.seed_sample_items();
    }

    CliApp::new(service, prompt, io::stdout()).run()?;

    tracing::info!("🛒 Shopping cart stopped");
    Ok(())
}
