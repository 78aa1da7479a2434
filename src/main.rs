use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use nimbus::cli::args::{Cli, Commands};
use nimbus::cli::commands;
use nimbus::config::{Config, Paths};
use nimbus::output::Renderer;
use nimbus::session::Session;
use nimbus::storage::FileStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Completions { shell }) = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let paths = Paths::default();
    let config_file = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_file)
        .with_context(|| format!("failed to load configuration from {}", config_file.display()))?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let data_file = cli.data_file.unwrap_or_else(|| config.data_file(&paths));
    let mut session = Session::open(FileStore::new(&data_file), Renderer::new(format))
        .with_context(|| format!("failed to load tasks from {}", data_file.display()))?;

    match cli.command {
        Some(Commands::Exec { line }) => match commands::exec(&mut session, &line) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            },
            Err(e) => {
                eprintln!("{}", session.renderer().render_error(&e));
                std::process::exit(1);
            },
        },
        Some(Commands::Completions { .. }) => {},
        None => session.run(io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}

/// Install the stderr log subscriber. `NIMBUS_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("NIMBUS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("nimbus={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
