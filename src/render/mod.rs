//! SVG chart rendering for display sets.

pub mod bar;
pub mod bubble;
pub mod color;
pub mod pack;
pub mod tooltip;

use tracing::debug;

use crate::app::ports::ChartRenderer;
use crate::config::{ChartKind, ChartVariant};
use crate::error::RenderError;
use crate::types::Game;

pub(crate) fn drawing_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Default renderer: plotters SVG backend, bar or bubble per variant kind
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgChartRenderer;

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, games: &[&Game], variant: &ChartVariant) -> Result<String, RenderError> {
        debug!(variant = %variant.name, kind = ?variant.kind, games = games.len(), "Rendering chart");
        match variant.kind {
            ChartKind::Bar => bar::draw_bar_chart(games, variant),
            ChartKind::Bubble => bubble::draw_bubble_chart(games, variant),
        }
    }
}
