//! Completion-service adapters.

pub mod memory;
pub mod openai;

pub use memory::{ScriptedCompletionService, ScriptedReply};
pub use openai::OpenAiCompletionService;
