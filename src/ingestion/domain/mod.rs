//! Domain model for task ingestion.
//!
//! A [`ParsedTaskCandidate`] is untrusted model output; a
//! [`NormalizedTask`] is the validated, total result handed to the store.

mod candidate;
mod error;
mod normalized;
mod outcome;
mod vocabulary;

pub use candidate::ParsedTaskCandidate;
pub use error::{CandidateDecodeError, IngestionError};
pub use normalized::NormalizedTask;
pub use outcome::{IngestionOutcome, IngestionRequest, IngestionStage};
pub use vocabulary::{PRIORITY_VOCABULARY, infer_priority};
