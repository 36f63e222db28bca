mod args;
mod handlers;

use args::{Cli, Command};
use clap::Parser;
use pairpack::SchemaRegistry;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut registry = SchemaRegistry::load_with_overrides()?;
    if let Some(path) = &cli.schemas {
        let extra = SchemaRegistry::load_from_file(path)
            .map_err(|e| format!("failed to load schemas from {}: {}", path.display(), e))?;
        registry.merge(extra);
    }

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &registry),
        Command::Decode(args) => handlers::decode::handle(args, &registry),
        Command::Schemas(args) => handlers::schemas::handle(args, &registry),
    }
}

fn init_tracing(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    Ok(())
}

/// Read input from a file, or stdin when no file is given
pub(crate) fn read_input(file: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
