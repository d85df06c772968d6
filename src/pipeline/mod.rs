//! Message pipeline.
//!
//! Runs the tokenizer and featurizers in order on each message; batches can
//! be sharded across scoped worker threads.

pub mod component;
pub mod orchestrator;

pub use component::Component;
pub use orchestrator::Pipeline;
