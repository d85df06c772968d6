//! Default configuration constants for spellfeat.
//!
//! Shared between the config types and the components so that defaults
//! stay consistent.

/// Text of the aggregate token appended after the word tokens.
///
/// Represents the whole utterance; its feature row carries sentence-level
/// summaries.
pub const AGGREGATE_TOKEN: &str = "__CLS__";

/// Attribute holding the main free-text of a message.
pub const TEXT_ATTRIBUTE: &str = "text";

/// The single language the spelling corrector supports.
pub const SUPPORTED_LANGUAGE: &str = "en";

/// Token case is preserved unless configured otherwise.
pub const CASE_SENSITIVE: bool = true;

/// Symbol used to split intents into sub-intents. Carried for config
/// compatibility; the tokenizer does not tokenize intents.
pub const INTENT_SPLIT_SYMBOL: &str = "_";

/// Maximum edit distance searched by the SymSpell corrector.
///
/// SymSpell precomputes deletes up to this distance, so lookups cannot
/// exceed it.
pub const MAX_EDIT_DISTANCE: i64 = 2;

/// Default number of worker threads used when featurizing a training batch.
pub const WORKERS: usize = 1;

/// Symbols that carry meaning in chat text and never act as split points.
pub const MEANING_SYMBOLS: &[char] = &['#', '@', '&'];

/// Punctuation that may appear inside URLs, e-mail addresses and numbers.
///
/// A punctuation run between two word characters is kept intact when it
/// contains any of these.
pub const URL_SAFE_PUNCTUATION: &[char] = &[
    '.', '_', '~', ':', '/', '?', '[', ']', '(', ')', '!', '$', '*', '+', ',', ';', '=', '-',
];

/// Confidence reported for a word the corrector has no opinion on.
///
/// Used for rows of corrected words without a paired original word and as
/// the aggregate value of an utterance with no words.
pub const NEUTRAL_CONFIDENCE: f32 = 1.0;
