use crate::bio::alignment::{AlignmentRequest, ScoringParameters};
use crate::error::{AlignaError, AlignaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringParameters,
    pub output: OutputConfig,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Fold sequences to upper case before aligning
    pub uppercase: bool,
    /// Print the score matrix below the alignment
    pub show_matrix: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// A named pair of sequences, optionally with its own scoring.
///
/// A preset missing a sequence still loads; aligning it reports
/// `InvalidInput` without affecting the other presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq2: Option<String>,
    /// Falls back to the top-level scoring when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringParameters>,
}

impl Preset {
    pub fn new(name: &str, seq1: &str, seq2: &str) -> Self {
        Self {
            name: name.to_string(),
            seq1: Some(seq1.to_string()),
            seq2: Some(seq2.to_string()),
            scoring: None,
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringParameters) -> Self {
        self.scoring = Some(scoring);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringParameters::new(0, 1, -1),
            output: OutputConfig {
                format: OutputFormat::Text,
                uppercase: true,
                show_matrix: false,
            },
            presets: vec![
                Preset::new("default", "ACCGTGAAGCCAATAC", "AGCGTGCAGCCAATAC"),
                Preset::new("substitutions", "ACCGTGAAGCCAATAC", "AGCGTGCAGCCAATAC")
                    .with_scoring(ScoringParameters::new(-2, 1, -1)),
                Preset::new("deletion", "ACGTACGT", "ACGTCGT")
                    .with_scoring(ScoringParameters::new(-2, 1, -1)),
                Preset::new("empty", "", "ACGT").with_scoring(ScoringParameters::new(-2, 1, -1)),
            ],
        }
    }
}

impl Config {
    pub fn preset(&self, name: &str) -> AlignaResult<&Preset> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AlignaError::InvalidInput(format!("No preset named '{}'", name)))
    }

    /// Turn a preset into a request using this configuration's defaults.
    pub fn request_for(&self, preset: &Preset) -> AlignmentRequest {
        AlignmentRequest {
            name: Some(preset.name.clone()),
            seq1: preset.seq1.clone(),
            seq2: preset.seq2.clone(),
            scoring: preset.scoring.unwrap_or(self.scoring),
            uppercase: self.output.uppercase,
        }
    }

    pub fn requests(&self) -> Vec<AlignmentRequest> {
        self.presets.iter().map(|p| self.request_for(p)).collect()
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> AlignaResult<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> AlignaResult<()> {
    let contents = toml::to_string_pretty(config)?;
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
