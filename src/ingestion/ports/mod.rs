//! Port contracts for language inference.

pub mod completion;

#[cfg(test)]
pub use completion::MockCompletionService;
pub use completion::{
    CompletionError, CompletionRequest, CompletionResult, CompletionService, ResponseFormat,
};
