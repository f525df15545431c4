//! Ingestion services: inference, normalization, fallback and intake.

pub mod fallback;
pub mod inference;
pub mod intake;
pub mod normalizer;
pub mod orchestrator;

pub use fallback::synthesize;
pub use inference::{InferenceClient, InferenceUnavailable};
pub use intake::{IngestedTask, TaskIntakeError, TaskIntakeResult, TaskIntakeService};
pub use normalizer::TaskNormalizer;
pub use orchestrator::IngestionOrchestrator;
