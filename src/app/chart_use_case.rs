use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::app::ports::{ChartRenderer, GameSource};
use crate::config::ChartVariant;
use crate::error::Result;
use crate::pipeline::processing::filter::{FilterPipeline, FilterReport, StageCount};
use crate::pipeline::processing::normalize::normalize_all;
use crate::types::Game;

/// Result of a complete chart run
#[derive(Debug, Serialize)]
pub struct ChartRunResult {
    pub variant: String,
    pub total_records: usize,
    pub displayed: usize,
    pub stage_counts: Vec<StageCount>,
    #[serde(skip)]
    pub svg: String,
}

impl ChartRunResult {
    /// The filter report this run was drawn from
    pub fn report(&self) -> FilterReport {
        FilterReport {
            input: self.total_records,
            stages: self.stage_counts.clone(),
        }
    }
}

/// Load, normalize, filter and render one chart variant
pub struct ChartUseCase {
    source: Arc<dyn GameSource>,
    renderer: Arc<dyn ChartRenderer>,
}

impl ChartUseCase {
    pub fn new(source: Arc<dyn GameSource>, renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { source, renderer }
    }

    /// Load and normalize every record at `location`
    pub async fn load_games(&self, location: &str) -> Result<Vec<Game>> {
        let records = self.source.load(location).await?;
        Ok(normalize_all(&records))
    }

    /// The filtered display set, owned, with per-stage counts. Does not render.
    #[instrument(name = "chart", skip_all, fields(variant = %variant.name))]
    pub async fn display_set(
        &self,
        variant: &ChartVariant,
        location: &str,
    ) -> Result<(Vec<Game>, FilterReport)> {
        let games = self.load_games(location).await?;
        let selection = FilterPipeline::for_variant(variant).run(&games);
        let owned = selection.games.into_iter().cloned().collect();
        Ok((owned, selection.report))
    }

    #[instrument(name = "chart", skip_all, fields(variant = %variant.name))]
    pub async fn run(&self, variant: &ChartVariant, location: &str) -> Result<ChartRunResult> {
        let games = self.load_games(location).await?;
        let selection = FilterPipeline::for_variant(variant).run(&games);
        let svg = self.renderer.render(&selection.games, variant)?;

        info!(
            total = games.len(),
            displayed = selection.games.len(),
            svg_bytes = svg.len(),
            "Chart rendered"
        );

        Ok(ChartRunResult {
            variant: variant.name.clone(),
            total_records: games.len(),
            displayed: selection.games.len(),
            stage_counts: selection.report.stages,
            svg,
        })
    }
}
