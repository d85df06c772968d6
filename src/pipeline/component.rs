//! Component abstraction shared by the tokenizer and featurizers.

use crate::error::Result;
use crate::message::Message;

/// A processing step that fills in part of a [`Message`].
///
/// Components keep no per-message state, so the same instance can serve
/// many threads at once.
pub trait Component: Send + Sync {
    /// Returns the name of this component for logging and error reporting.
    fn name(&self) -> &'static str;

    /// Processes a single message in place.
    fn process(&self, message: &mut Message) -> Result<()>;
}
