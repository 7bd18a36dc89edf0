pub mod commands;
pub mod formatter;
pub mod output;

use crate::core::{default_config_path, load_config, Config};
use crate::error::{AlignaError, AlignaResult};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "aligna",
    version,
    about = "Needleman-Wunsch global alignment of two sequences",
    long_about = "Aligna fills the global alignment score matrix for two sequences, traces back \
                  one optimal alignment (ties resolved diagonal, then up, then left) and reports \
                  matches, alignment length and similarity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,

    /// Configuration file (default: ${ALIGNA_HOME}/config.toml if present)
    #[arg(short, long, value_name = "FILE", global = true, env = "ALIGNA_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two sequences given on the command line
    Align(commands::align::AlignArgs),

    /// Align one or all configured presets
    Preset(commands::preset::PresetArgs),

    /// Create or inspect the configuration file
    Config(commands::config::ConfigArgs),
}

/// Load the configuration in effect.
///
/// An explicit path must exist. Without one the default location is used
/// when present, otherwise built-in defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> AlignaResult<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AlignaError::Configuration(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            load_config(path)
        }
        None => {
            let path = default_config_path();
            if path.exists() {
                tracing::debug!("loading config from {}", path.display());
                load_config(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
