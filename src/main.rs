use anyhow::Result;
use clap::Parser;

use unitwise::{
    app::{load_config, load_config_from},
    cli::{handle_command, Cli},
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose {
        init_logger("debug");
    } else {
        init_logger("warn");
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        load_config_from(config_path)?
    } else {
        load_config().unwrap_or_default()
    };

    handle_command(&cli.command, &config).await
}
