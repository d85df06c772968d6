use crate::defaults;
use crate::error::{Result, SpellfeatError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub corrector: CorrectorConfig,
    pub pipeline: PipelineConfig,
}

/// Options shared by the tokenizer and the featurizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TokenizerConfig {
    pub case_sensitive: bool,
    /// Accepted for compatibility with other tokenizers; unused here.
    pub intent_tokenization_flag: bool,
    /// Accepted for compatibility with other tokenizers; unused here.
    pub intent_split_symbol: String,
    pub language: String,
    pub attribute: String,
}

/// Spelling corrector configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Frequency dictionary (`word count` per line).
    pub dictionary: Option<PathBuf>,
    pub max_edit_distance: i64,
    pub mode: CorrectionMode,
}

/// How the corrector rewrites a full utterance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionMode {
    /// Correct every word on its own, keeping punctuation and spacing.
    #[default]
    Word,
    /// Let the corrector merge and split words across the whole utterance.
    Compound,
}

/// Batch processing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub workers: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            case_sensitive: defaults::CASE_SENSITIVE,
            intent_tokenization_flag: false,
            intent_split_symbol: defaults::INTENT_SPLIT_SYMBOL.to_string(),
            language: defaults::SUPPORTED_LANGUAGE.to_string(),
            attribute: defaults::TEXT_ATTRIBUTE.to_string(),
        }
    }
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            max_edit_distance: defaults::MAX_EDIT_DISTANCE,
            mode: CorrectionMode::default(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: defaults::WORKERS,
        }
    }
}

impl TokenizerConfig {
    /// Check the options the components cannot work without.
    pub fn validate(&self) -> Result<()> {
        if self.language != defaults::SUPPORTED_LANGUAGE {
            return Err(SpellfeatError::UnsupportedLanguage {
                language: self.language.clone(),
                supported: defaults::SUPPORTED_LANGUAGE.to_string(),
            });
        }
        if self.attribute.trim().is_empty() {
            return Err(SpellfeatError::ConfigInvalidValue {
                key: "tokenizer.attribute".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only a missing file falls back to defaults; invalid TOML is an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e)
                if e.downcast_ref::<std::io::Error>()
                    .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound) =>
            {
                tracing::debug!(path = %path.display(), "config file missing, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.context(format!("Failed to load config from {}", path.display()))),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SPELLFEAT_LANGUAGE → tokenizer.language
    /// - SPELLFEAT_CASE_SENSITIVE → tokenizer.case_sensitive (`true`/`false`)
    /// - SPELLFEAT_DICTIONARY → corrector.dictionary
    /// - SPELLFEAT_WORKERS → pipeline.workers
    ///
    /// Empty or unparsable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(language) = std::env::var("SPELLFEAT_LANGUAGE")
            && !language.is_empty()
        {
            self.tokenizer.language = language;
        }

        if let Ok(value) = std::env::var("SPELLFEAT_CASE_SENSITIVE")
            && let Ok(case_sensitive) = value.parse::<bool>()
        {
            self.tokenizer.case_sensitive = case_sensitive;
        }

        if let Ok(dictionary) = std::env::var("SPELLFEAT_DICTIONARY")
            && !dictionary.is_empty()
        {
            self.corrector.dictionary = Some(PathBuf::from(dictionary));
        }

        if let Ok(value) = std::env::var("SPELLFEAT_WORKERS")
            && let Ok(workers) = value.parse::<usize>()
        {
            self.pipeline.workers = workers;
        }

        self
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.tokenizer.validate()?;

        if !(0..=defaults::MAX_EDIT_DISTANCE).contains(&self.corrector.max_edit_distance) {
            return Err(SpellfeatError::ConfigInvalidValue {
                key: "corrector.max_edit_distance".to_string(),
                message: format!(
                    "must be between 0 and {}, got {}",
                    defaults::MAX_EDIT_DISTANCE,
                    self.corrector.max_edit_distance
                ),
            });
        }

        if self.pipeline.workers == 0 {
            return Err(SpellfeatError::ConfigInvalidValue {
                key: "pipeline.workers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/spellfeat/config.toml on Linux, or `None` when the
    /// platform has no config directory.
    #[cfg(feature = "config-path")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spellfeat").join("config.toml"))
    }
}
