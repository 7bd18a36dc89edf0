pub mod config;
pub mod paths;

pub use config::{load_config, save_config, Config, OutputConfig, OutputFormat, Preset};
pub use paths::{aligna_home, default_config_path};
