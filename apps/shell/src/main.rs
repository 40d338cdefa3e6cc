#![allow(clippy::print_stdout)]

mod args;
mod handlers;
mod render;

use crate::args::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use weave::kernel::config::load_host_config;
use weave::logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_host_config(cli.config.as_deref())?;
    if cli.verbose {
        config.logging.level = "debug".to_owned();
    }
    let _logger = Logger::init(env!("CARGO_PKG_NAME"), &config.logging)?;

    match cli.command {
        Commands::Compose { manifest, tenant, format } => {
            handlers::compose(&config, &manifest, &tenant, format)?;
        },
        Commands::Features { manifest, format } => handlers::features(&config, &manifest, format)?,
    }

    Ok(())
}
