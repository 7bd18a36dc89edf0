use crate::bio::alignment::align_batch;
use crate::cli::commands::print_result;
use crate::cli::output::*;
use crate::core::{Config, OutputFormat};
use clap::Args;

#[derive(Args)]
pub struct PresetArgs {
    /// Preset to align (defaults to "default")
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Align every configured preset
    #[arg(long, conflicts_with = "name")]
    pub all: bool,

    /// List configured presets without aligning
    #[arg(long, conflicts_with_all = ["name", "all"])]
    pub list: bool,

    /// Print score matrices
    #[arg(long)]
    pub matrix: bool,

    /// Output format (text, json)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: PresetArgs, config: &Config) -> anyhow::Result<()> {
    if args.list {
        list_presets(config);
        return Ok(());
    }

    let format = args.format.unwrap_or(config.output.format);
    let show_matrix = args.matrix || config.output.show_matrix;

    let requests = if args.all {
        config.requests()
    } else {
        let name = args.name.as_deref().unwrap_or("default");
        vec![config.request_for(config.preset(name)?)]
    };

    if requests.is_empty() {
        warning("No presets configured");
        return Ok(());
    }

    let results = align_batch(&requests);
    let mut failures = 0;
    let mut first_error = None;

    for (request, result) in requests.iter().zip(results) {
        match result {
            Ok(alignment) => {
                let (seq1, seq2) = request.validate()?;
                print_result(
                    request.name.as_deref(),
                    &seq1,
                    &seq2,
                    &alignment,
                    format,
                    show_matrix,
                )?;
            }
            Err(e) => {
                failures += 1;
                error(&format!(
                    "{}: {}",
                    request.name.as_deref().unwrap_or("preset"),
                    e
                ));
                first_error.get_or_insert(e);
            }
        }
    }

    // Keep the first failure as the source so the exit code follows its kind
    match first_error {
        Some(e) => Err(anyhow::Error::new(e)
            .context(format!("{} of {} presets failed", failures, requests.len()))),
        None => Ok(()),
    }
}

fn list_presets(config: &Config) {
    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Seq 1"),
        header_cell("Seq 2"),
        header_cell("Gap"),
        header_cell("Match"),
        header_cell("Mismatch"),
    ]);

    for preset in &config.presets {
        let scoring = preset.scoring.unwrap_or(config.scoring);
        table.add_row(vec![
            preset.name.clone(),
            preset.seq1.clone().unwrap_or_else(|| "(missing)".to_string()),
            preset.seq2.clone().unwrap_or_else(|| "(missing)".to_string()),
            scoring.gap.to_string(),
            scoring.match_score.to_string(),
            scoring.mismatch.to_string(),
        ]);
    }

    println!("{}", table);
}
