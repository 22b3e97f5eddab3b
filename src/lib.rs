//! Metacritic review-score charts: load, normalize, filter, render.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod types;

// Application use cases and the adapters they run against
pub mod app;
pub mod infra;

// Re-export commonly used types
pub use config::{ChartKind, ChartVariant, ChartsConfig, ColorBy, Layout};
pub use error::{ChartError, ConfigError, LoadError, RenderError};
pub use pipeline::{normalize, normalize_all, FilterPipeline, FilterStage};
pub use types::{CriticReviews, Game, RawGameRecord, UserReviews};
