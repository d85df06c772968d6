//! Component chain that tokenizes and featurizes messages.

use crate::config::Config;
use crate::correction::SpellingCorrector;
use crate::error::{Result, SpellfeatError};
use crate::featurizer::CorrectionFeaturizer;
use crate::message::Message;
use crate::pipeline::component::Component;
use crate::tokenizer::AligningTokenizer;
use std::sync::Arc;
use std::thread;

/// Ordered chain of components applied to each message.
///
/// A message is either fully processed or left exactly as it was.
pub struct Pipeline {
    components: Vec<Box<dyn Component>>,
    workers: usize,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("components", &self.component_names())
            .field("workers", &self.workers)
            .finish()
    }
}

impl Pipeline {
    /// Wire the aligning tokenizer and the correction featurizer around one
    /// corrector.
    ///
    /// Fails on invalid configuration or a corrector that cannot serve the
    /// configured language, before any message is seen.
    pub fn new(config: &Config, corrector: Arc<dyn SpellingCorrector>) -> Result<Self> {
        config.validate()?;

        let tokenizer = AligningTokenizer::new(corrector.clone(), config.tokenizer.clone())?;
        let featurizer = CorrectionFeaturizer::new(corrector.clone(), &config.tokenizer)?;

        tracing::debug!(
            corrector = corrector.name(),
            language = %config.tokenizer.language,
            attribute = %config.tokenizer.attribute,
            workers = config.pipeline.workers,
            "pipeline ready"
        );

        Ok(Self::from_components(
            vec![Box::new(tokenizer), Box::new(featurizer)],
            config.pipeline.workers,
        ))
    }

    /// Build the pipeline with a SymSpell corrector from `[corrector]`.
    #[cfg(feature = "symspell")]
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let corrector = crate::correction::symspell::SymSpellCorrector::from_config(
            &config.corrector,
            &config.tokenizer.language,
        )?;
        Self::new(config, Arc::new(corrector))
    }

    pub fn from_components(components: Vec<Box<dyn Component>>, workers: usize) -> Self {
        Self {
            components,
            workers: workers.max(1),
        }
    }

    pub fn component_names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    /// Run every component on one message.
    ///
    /// Components work on a staged copy which replaces `message` only when
    /// all of them succeed.
    pub fn process(&self, message: &mut Message) -> Result<()> {
        let mut staged = message.clone();
        for component in &self.components {
            component.process(&mut staged).inspect_err(|e| {
                tracing::warn!(component = component.name(), error = %e, "message aborted");
            })?;
        }
        *message = staged;
        Ok(())
    }

    /// Process a training batch, sharded across the configured workers.
    ///
    /// Each worker stops at its first failing message; the first error in
    /// batch order is returned once all workers have finished.
    pub fn train(&self, messages: &mut [Message]) -> Result<()> {
        if self.workers == 1 || messages.len() < 2 {
            return messages
                .iter_mut()
                .try_for_each(|message| self.process(message));
        }

        let shard_size = messages.len().div_ceil(self.workers);
        tracing::debug!(
            messages = messages.len(),
            workers = self.workers,
            shard_size,
            "training batch"
        );

        let results: Vec<Result<()>> = thread::scope(|scope| {
            let handles: Vec<_> = messages
                .chunks_mut(shard_size)
                .map(|shard| {
                    scope.spawn(move || {
                        shard
                            .iter_mut()
                            .try_for_each(|message| self.process(message))
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| {
                    h.join().unwrap_or_else(|_| {
                        Err(SpellfeatError::Other("training worker panicked".to_string()))
                    })
                })
                .collect()
        });

        results.into_iter().collect()
    }
}
