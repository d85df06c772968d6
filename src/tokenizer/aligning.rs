//! Tokenizer that spell-corrects an utterance and aligns the corrected words
//! back to character offsets.

use crate::config::TokenizerConfig;
use crate::correction::SpellingCorrector;
use crate::error::{Result, SpellfeatError};
use crate::message::{Message, Token};
use crate::pipeline::Component;
use crate::tokenizer::splitter::split_words;
use std::sync::Arc;

/// Result of tokenizing one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    /// Words of the input before correction.
    pub original_words: Vec<String>,
    /// Corrected word tokens followed by the aggregate token.
    pub tokens: Vec<Token>,
}

/// Splits text, corrects it as a whole and re-splits the corrected text.
pub struct AligningTokenizer {
    corrector: Arc<dyn SpellingCorrector>,
    config: TokenizerConfig,
}

impl std::fmt::Debug for AligningTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AligningTokenizer")
            .field("corrector", &self.corrector.name())
            .field("config", &self.config)
            .finish()
    }
}

impl AligningTokenizer {
    /// Create a tokenizer, checking that the corrector can serve the
    /// configured language.
    pub fn new(corrector: Arc<dyn SpellingCorrector>, config: TokenizerConfig) -> Result<Self> {
        check_capability(corrector.as_ref(), &config)?;
        Ok(Self { corrector, config })
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize `text` without touching any message.
    pub fn tokenize(&self, text: &str) -> Result<Tokenized> {
        let text = if self.config.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };

        let original_words = split_words(&text);

        let corrected_text = self.corrector.correct(&text).inspect_err(|e| {
            tracing::warn!(corrector = self.corrector.name(), error = %e, "correction failed");
        })?;

        let mut corrected_words = split_words(&corrected_text);
        if corrected_words.is_empty() {
            tracing::debug!(
                corrected = %corrected_text,
                "corrected text has no words, using it as a single token"
            );
            corrected_words.push(corrected_text.clone());
        }

        let mut tokens = tokens_from_words(&corrected_words, &corrected_text)?;
        tokens.push(Token::aggregate());

        Ok(Tokenized {
            original_words,
            tokens,
        })
    }
}

/// Fail fast when the corrector cannot serve the configured language.
pub(crate) fn check_capability(
    corrector: &dyn SpellingCorrector,
    config: &TokenizerConfig,
) -> Result<()> {
    config.validate()?;
    if !corrector.is_ready() {
        return Err(SpellfeatError::ConfigInvalidValue {
            key: "corrector".to_string(),
            message: format!("{} is not available", corrector.name()),
        });
    }
    if corrector.language() != config.language {
        return Err(SpellfeatError::UnsupportedLanguage {
            language: config.language.clone(),
            supported: corrector.language().to_string(),
        });
    }
    Ok(())
}

/// Locate each word in `text` left to right and attach character offsets.
///
/// A word is searched for only after the end of the previous one, so
/// repeated words get distinct, increasing spans.
pub fn tokens_from_words(words: &[String], text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::with_capacity(words.len() + 1);
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for word in words {
        let rest = &text[byte_pos..];
        let found = rest.find(word.as_str()).ok_or_else(|| SpellfeatError::Alignment {
            word: word.clone(),
            offset: char_pos,
        })?;

        let start = char_pos + rest[..found].chars().count();
        let end = start + word.chars().count();
        tokens.push(Token::new(word.as_str(), start, end));

        byte_pos += found + word.len();
        char_pos = end;
    }

    Ok(tokens)
}

impl Component for AligningTokenizer {
    fn name(&self) -> &'static str {
        "AligningTokenizer"
    }

    fn process(&self, message: &mut Message) -> Result<()> {
        let Tokenized {
            original_words,
            tokens,
        } = self.tokenize(&message.text)?;
        message.original_words = original_words;
        message.tokens = tokens;
        Ok(())
    }
}
