use aligna::cli::{resolve_config, Cli, Commands};
use aligna::AlignaError;
use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // ALIGNA_LOG sets the filter; -v raises the fallback level
    let fallback = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let log_level = std::env::var("ALIGNA_LOG").unwrap_or_else(|_| fallback.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<AlignaError>() {
            Some(AlignaError::Configuration(_)) => 2,
            Some(AlignaError::Io(_)) => 3,
            Some(AlignaError::InvalidInput(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let num_threads = if cli.threads == 0 {
        num_cpus::get()
    } else {
        cli.threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    if cli.verbose > 0 {
        eprintln!("Using {} threads", num_threads);
    }

    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Align(args) => aligna::cli::commands::align::run(args, &config),
        Commands::Preset(args) => aligna::cli::commands::preset::run(args, &config),
        Commands::Config(args) => aligna::cli::commands::config::run(args, &config),
    }
}
