use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::color::{darker, OrdinalColorScale};
use super::drawing_error;
use super::tooltip::{annotate, TooltipShape, TooltipTarget};
use crate::config::ChartVariant;
use crate::constants::{SCORE_AXIS_MAX, SCORE_AXIS_MIN, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::error::RenderError;
use crate::types::Game;

const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);

/// Bar chart: one equal-width band per game along x, score on a fixed
/// [50, 100] linear y scale. Bars take the middle half of their band.
pub fn draw_bar_chart(games: &[&Game], variant: &ChartVariant) -> Result<String, RenderError> {
    let layout = variant.layout();
    let colors = OrdinalColorScale::for_games(games, variant.color_by);
    let bands = games.len().max(1) as f64;

    let mut svg = String::new();
    let mut targets = Vec::with_capacity(games.len());
    {
        let root = SVGBackend::with_string(&mut svg, (layout.width, layout.height)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(variant.title.as_str(), ("sans-serif", 28.0).into_font())
            .margin(layout.margin)
            .x_label_area_size(60)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..bands, SCORE_AXIS_MIN..SCORE_AXIS_MAX)
            .map_err(drawing_error)?;

        // Band labels are drawn per game below, not from numeric ticks
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_| String::new())
            .y_desc(Y_AXIS_LABEL)
            .x_desc(X_AXIS_LABEL)
            .draw()
            .map_err(drawing_error)?;

        chart
            .draw_series((0..=games.len()).map(|i| {
                PathElement::new(
                    vec![(i as f64, SCORE_AXIS_MIN), (i as f64, SCORE_AXIS_MAX)],
                    GRID_COLOR,
                )
            }))
            .map_err(drawing_error)?;

        for (i, game) in games.iter().enumerate() {
            let Some(score) = game.score else {
                continue;
            };
            let top = score.clamp(SCORE_AXIS_MIN, SCORE_AXIS_MAX);
            let left = i as f64 + 0.25;
            let right = i as f64 + 0.75;
            let fill = colors.color(game);
            let corners = [(left, SCORE_AXIS_MIN), (right, top)];

            chart
                .draw_series(std::iter::once(Rectangle::new(corners, fill.filled())))
                .map_err(drawing_error)?;
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    corners,
                    darker(fill).stroke_width(3),
                )))
                .map_err(drawing_error)?;

            let (x0, y0) = chart.backend_coord(&(left, top));
            let (x1, y1) = chart.backend_coord(&(right, SCORE_AXIS_MIN));
            targets.push(TooltipTarget::for_game(
                game,
                TooltipShape::Rect {
                    x: x0,
                    y: y0,
                    width: x1 - x0,
                    height: y1 - y0,
                },
            ));
        }

        let label_style = TextStyle::from(("sans-serif", 12.0).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        chart
            .draw_series(games.iter().enumerate().map(|(i, game)| {
                Text::new(
                    game.display_name().to_string(),
                    (i as f64 + 0.5, SCORE_AXIS_MIN),
                    label_style.clone(),
                )
            }))
            .map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
    }

    Ok(annotate(svg, &targets))
}
