use std::path::PathBuf;

/// Get the aligna home directory
/// Checks ALIGNA_HOME environment variable, falls back to ${HOME}/.aligna
pub fn aligna_home() -> PathBuf {
    if let Ok(path) = std::env::var("ALIGNA_HOME") {
        PathBuf::from(path)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".aligna")
    }
}

/// Location of the configuration file used when `--config` is not given
pub fn default_config_path() -> PathBuf {
    aligna_home().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_lives_under_home() {
        let path = default_config_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        assert!(path.starts_with(aligna_home()));
    }
}
