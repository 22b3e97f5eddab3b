// Chart data pipeline: ingestion, then normalization and filtering

pub mod ingestion;
pub mod processing;

// Re-export key types and functions from each stage
pub use ingestion::JsonGameSource;
pub use processing::filter::{DisplaySet, FilterPipeline, FilterReport, FilterStage};
pub use processing::normalize::{normalize, normalize_all};
