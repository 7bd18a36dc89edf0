use crate::cli::output::*;
use crate::core::{default_config_path, save_config, Config};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with the default settings and presets
    Init {
        /// Destination (default: ${ALIGNA_HOME}/config.toml)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration in effect
    Show,
}

pub fn run(args: ConfigArgs, config: &Config) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Init { path, force } => {
            let path = path.unwrap_or_else(default_config_path);
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            save_config(&path, &Config::default())?;
            success(&format!("Wrote {}", path.display()));
        }
        ConfigCommands::Show => {
            section_header_with_line("Configuration");
            tree_item(false, "Gap", Some(&config.scoring.gap.to_string()));
            tree_item(false, "Match", Some(&config.scoring.match_score.to_string()));
            tree_item(false, "Mismatch", Some(&config.scoring.mismatch.to_string()));
            tree_item(
                false,
                "Upper-case input",
                Some(if config.output.uppercase { "yes" } else { "no" }),
            );
            tree_item(true, "Presets", Some(&config.presets.len().to_string()));
            println!();
            println!("{}", toml::to_string_pretty(config)?);
        }
    }
    Ok(())
}
