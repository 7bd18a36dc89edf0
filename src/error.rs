//! Error types for aligna

use thiserror::Error;

/// Main error type for aligna operations
#[derive(Error, Debug)]
pub enum AlignaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for aligna operations
pub type AlignaResult<T> = Result<T, AlignaError>;

impl From<serde_json::Error> for AlignaError {
    fn from(err: serde_json::Error) -> Self {
        AlignaError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for AlignaError {
    fn from(err: toml::de::Error) -> Self {
        AlignaError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for AlignaError {
    fn from(err: toml::ser::Error) -> Self {
        AlignaError::Serialization(format!("Failed to serialize config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let io_error = AlignaError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(format!("{}", io_error).contains("IO error"));

        let input_error = AlignaError::InvalidInput("seq1 is missing".to_string());
        assert_eq!(format!("{}", input_error), "Invalid input: seq1 is missing");

        let config_error = AlignaError::Configuration("missing field".to_string());
        assert_eq!(format!("{}", config_error), "Configuration error: missing field");

        let ser_error = AlignaError::Serialization("invalid JSON".to_string());
        assert_eq!(format!("{}", ser_error), "Serialization error: invalid JSON");
    }

    #[test]
    fn test_error_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: AlignaError = json_err.into();
        assert!(matches!(err, AlignaError::Serialization(_)));

        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: AlignaError = toml_err.into();
        assert!(matches!(err, AlignaError::Configuration(_)));
    }
}
