use async_trait::async_trait;

use crate::config::ChartVariant;
use crate::error::{LoadError, RenderError};
use crate::types::{Game, RawGameRecord};

/// Source of raw game records (local file, URL, fixture)
#[async_trait]
pub trait GameSource: Send + Sync {
    async fn load(&self, location: &str) -> Result<Vec<RawGameRecord>, LoadError>;
}

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpGetResult, LoadError>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Terminal sink that draws a display set. Returns an SVG document.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, games: &[&Game], variant: &ChartVariant) -> Result<String, RenderError>;
}
