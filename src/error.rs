//! Error types for spellfeat.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellfeatError {
    // Configuration errors
    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Language '{language}' is not supported (supported: {supported})")]
    UnsupportedLanguage { language: String, supported: String },

    // Corrector errors
    #[error("Spelling corrector unavailable: {message}")]
    CorrectorUnavailable { message: String },

    #[error("Failed to load dictionary '{path}': {message}")]
    DictionaryLoad { path: String, message: String },

    // Alignment and feature errors
    #[error("Could not locate word '{word}' in corrected text at character {offset}")]
    Alignment { word: String, offset: usize },

    #[error("Message has no tokens for attribute '{attribute}'; run the tokenizer first")]
    MissingTokens { attribute: String },

    #[error(
        "Dense features for '{attribute}' have {actual} rows, expected {expected} (one per token)"
    )]
    FeatureShape {
        attribute: String,
        expected: usize,
        actual: usize,
    },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SpellfeatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_invalid_value_display() {
        let error = SpellfeatError::ConfigInvalidValue {
            key: "max_edit_distance".to_string(),
            message: "must be at most 2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for max_edit_distance: must be at most 2"
        );
    }

    #[test]
    fn test_unsupported_language_display() {
        let error = SpellfeatError::UnsupportedLanguage {
            language: "de".to_string(),
            supported: "en".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Language 'de' is not supported (supported: en)"
        );
    }

    #[test]
    fn test_corrector_unavailable_display() {
        let error = SpellfeatError::CorrectorUnavailable {
            message: "timed out".to_string(),
        };
        assert_eq!(error.to_string(), "Spelling corrector unavailable: timed out");
    }

    #[test]
    fn test_feature_shape_display() {
        let error = SpellfeatError::FeatureShape {
            attribute: "text".to_string(),
            expected: 3,
            actual: 5,
        };
        assert_eq!(
            error.to_string(),
            "Dense features for 'text' have 5 rows, expected 3 (one per token)"
        );
    }

    #[test]
    fn test_alignment_display() {
        let error = SpellfeatError::Alignment {
            word: "world".to_string(),
            offset: 6,
        };
        assert!(error.to_string().contains("'world'"));
        assert!(error.to_string().contains("character 6"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: SpellfeatError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_error = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let error: SpellfeatError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_source_chain_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: SpellfeatError = io_error.into();
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<SpellfeatError>();
        assert_sync::<SpellfeatError>();
    }
}
