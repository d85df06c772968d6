//! SymSpell-based spelling corrector using dictionary lookup.
//!
//! Sub-millisecond correction via edit-distance matching against a
//! frequency dictionary loaded at runtime. Word confidences are the relative
//! frequencies of the closest dictionary matches.

use crate::config::{CorrectionMode, CorrectorConfig};
use crate::correction::corrector::{Candidate, SpellingCorrector};
use crate::defaults::MAX_EDIT_DISTANCE;
use crate::error::{Result, SpellfeatError};
use std::path::Path;
use symspell::{SymSpell, UnicodeStringStrategy, Verbosity};

/// SymSpell corrector over a single-language frequency dictionary.
pub struct SymSpellCorrector {
    symspell: SymSpell<UnicodeStringStrategy>,
    language: String,
    name: String,
    max_edit_distance: i64,
    mode: CorrectionMode,
}

impl std::fmt::Debug for SymSpellCorrector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymSpellCorrector")
            .field("language", &self.language)
            .field("max_edit_distance", &self.max_edit_distance)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl SymSpellCorrector {
    /// Create a new SymSpellCorrector by loading a dictionary from file.
    ///
    /// The file should contain one entry per line: `word frequency`
    /// (whitespace-separated).
    pub fn from_file(path: &Path, language: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SpellfeatError::DictionaryLoad {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from_dictionary(&content, language))
    }

    /// Build a corrector from dictionary text already in memory.
    ///
    /// Malformed lines are skipped.
    pub fn from_dictionary(content: &str, language: &str) -> Self {
        let mut symspell: SymSpell<UnicodeStringStrategy> = SymSpell::default();

        let mut loaded = 0usize;
        for line in content.lines() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 2
                && let Ok(freq) = parts[1].parse::<i64>()
            {
                let word = parts[0].to_lowercase();
                symspell.load_dictionary_line(&format!("{} {}", word, freq), 0, 1, " ");
                loaded += 1;
            }
        }
        tracing::debug!(language, entries = loaded, "symspell dictionary loaded");

        Self {
            symspell,
            language: language.to_string(),
            name: format!("symspell-{}", language),
            max_edit_distance: MAX_EDIT_DISTANCE,
            mode: CorrectionMode::default(),
        }
    }

    /// Build a corrector from the `[corrector]` config section.
    pub fn from_config(config: &CorrectorConfig, language: &str) -> Result<Self> {
        let path = config
            .dictionary
            .as_deref()
            .ok_or_else(|| SpellfeatError::ConfigInvalidValue {
                key: "corrector.dictionary".to_string(),
                message: "a frequency dictionary is required".to_string(),
            })?;
        Ok(Self::from_file(path, language)?
            .with_max_edit_distance(config.max_edit_distance)
            .with_mode(config.mode))
    }

    /// Limit the edit distance searched per word, clamped to what the
    /// dictionary was indexed for.
    pub fn with_max_edit_distance(mut self, distance: i64) -> Self {
        self.max_edit_distance = distance.clamp(0, MAX_EDIT_DISTANCE);
        self
    }

    pub fn with_mode(mut self, mode: CorrectionMode) -> Self {
        self.mode = mode;
        self
    }

    fn correct_word(&self, word: &str) -> String {
        if word.chars().any(|c| c.is_numeric()) {
            return word.to_string();
        }
        let lower = word.to_lowercase();
        let suggestions = self
            .symspell
            .lookup(&lower, Verbosity::Top, self.max_edit_distance);
        match suggestions.first() {
            Some(best) if best.term != lower => restore_case(word, &best.term),
            _ => word.to_string(),
        }
    }

    /// Correct each alphanumeric run, leaving everything between untouched.
    fn correct_words(&self, text: &str) -> String {
        let mut corrected = String::with_capacity(text.len());
        let mut word = String::new();
        for c in text.chars() {
            if c.is_alphanumeric() {
                word.push(c);
                continue;
            }
            if !word.is_empty() {
                corrected.push_str(&self.correct_word(&word));
                word.clear();
            }
            corrected.push(c);
        }
        if !word.is_empty() {
            corrected.push_str(&self.correct_word(&word));
        }
        corrected
    }
}

/// Carry the casing of `original` over to a lowercase suggestion.
fn restore_case(original: &str, suggestion: &str) -> String {
    let first_upper = original.chars().next().is_some_and(char::is_uppercase);
    if first_upper && original.chars().count() > 1 && original.chars().all(|c| !c.is_lowercase()) {
        return suggestion.to_uppercase();
    }
    if first_upper {
        let mut suggestion_chars = suggestion.chars();
        if let Some(first) = suggestion_chars.next() {
            return first.to_uppercase().chain(suggestion_chars).collect();
        }
    }
    suggestion.to_string()
}

/// Carry per-word casing from `original` onto a lowercase compound
/// suggestion. Only applied when both have the same number of words;
/// otherwise the suggestion is returned as is.
fn restore_phrase_case(original: &str, suggestion: &str) -> String {
    let words: Vec<&str> = original
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let terms: Vec<&str> = suggestion.split_whitespace().collect();
    if words.len() != terms.len() {
        return suggestion.to_string();
    }
    words
        .iter()
        .zip(&terms)
        .map(|(word, term)| {
            if word.to_lowercase() == *term {
                word.to_string()
            } else {
                restore_case(word, term)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl SpellingCorrector for SymSpellCorrector {
    fn correct(&self, text: &str) -> Result<String> {
        match self.mode {
            CorrectionMode::Word => Ok(self.correct_words(text)),
            CorrectionMode::Compound => {
                let suggestions = self
                    .symspell
                    .lookup_compound(&text.to_lowercase(), self.max_edit_distance);
                Ok(suggestions
                    .first()
                    .map_or_else(|| text.to_string(), |s| restore_phrase_case(text, &s.term)))
            }
        }
    }

    fn spellcheck_candidates(&self, word: &str) -> Result<Vec<Candidate>> {
        if word.is_empty() {
            return Ok(vec![Candidate::new(word, 0.0)]);
        }

        let lower = word.to_lowercase();
        let suggestions = self
            .symspell
            .lookup(&lower, Verbosity::Closest, self.max_edit_distance);

        let Some(closest) = suggestions.first() else {
            return Ok(vec![Candidate::new(word, 0.0)]);
        };
        if closest.distance == 0 {
            return Ok(vec![Candidate::new(closest.term.clone(), 1.0)]);
        }

        let total: f64 = suggestions.iter().map(|s| s.count as f64).sum();
        let mut candidates: Vec<Candidate> = suggestions
            .iter()
            .map(|s| {
                let confidence = if total > 0.0 {
                    (s.count as f64 / total) as f32
                } else {
                    0.0
                };
                Candidate::new(s.term.clone(), confidence)
            })
            .collect();
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Ok(candidates)
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn name(&self) -> &str {
        &self.name
    }
}
