use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::color::OrdinalColorScale;
use super::drawing_error;
use super::pack::{fit, pack};
use super::tooltip::{annotate, TooltipShape, TooltipTarget};
use crate::config::ChartVariant;
use crate::error::RenderError;
use crate::types::Game;

const TITLE_HEIGHT: f64 = 36.0;

/// Weight for games without a usable score, so they still show up
const MIN_WEIGHT: f64 = 1.0;

/// Share of the canvas the circles roughly cover before fitting
const FILL_RATIO: f64 = 0.6;

/// Circle area proportional to score. Radii are pre-scaled to roughly pixel
/// units so the padding stays close to its configured pixel value after fitting.
fn radii_for(games: &[&Game], width: f64, height: f64) -> Vec<f64> {
    let weights: Vec<f64> = games
        .iter()
        .map(|g| g.score.unwrap_or(0.0).max(MIN_WEIGHT))
        .collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let k = (FILL_RATIO * width * height / (std::f64::consts::PI * total)).sqrt();
    weights.iter().map(|w| w.sqrt() * k).collect()
}

pub fn draw_bubble_chart(games: &[&Game], variant: &ChartVariant) -> Result<String, RenderError> {
    let layout = variant.layout();
    let colors = OrdinalColorScale::for_games(games, variant.color_by);
    let width = layout.width as f64;
    let height = layout.height as f64;

    let radii = radii_for(games, width, height - TITLE_HEIGHT);
    let circles = fit(
        &pack(&radii, layout.padding as f64),
        1.0,
        TITLE_HEIGHT,
        width - 2.0,
        height - TITLE_HEIGHT - 1.0,
    );

    let mut svg = String::new();
    let mut targets = Vec::with_capacity(games.len());
    {
        let root = SVGBackend::with_string(&mut svg, (layout.width, layout.height)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let title_style = TextStyle::from(("sans-serif", 24.0).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(
            variant.title.clone(),
            ((layout.width / 2) as i32, 6),
            title_style,
        ))
        .map_err(drawing_error)?;

        let label_style = TextStyle::from(("sans-serif", 10.0).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));

        for (game, circle) in games.iter().zip(&circles) {
            let color = colors.color(game);
            let center = (circle.x.round() as i32, circle.y.round() as i32);
            let r = circle.r.round().max(1.0) as i32;

            root.draw(&Circle::new(center, r, color.mix(0.1).filled()))
                .map_err(drawing_error)?;
            root.draw(&Circle::new(center, r, color.stroke_width(1)))
                .map_err(drawing_error)?;
            root.draw(&Text::new(
                game.display_name().to_string(),
                center,
                label_style.clone(),
            ))
            .map_err(drawing_error)?;

            targets.push(TooltipTarget::for_game(
                game,
                TooltipShape::Circle {
                    cx: center.0,
                    cy: center.1,
                    r,
                },
            ));
        }

        root.present().map_err(drawing_error)?;
    }

    Ok(annotate(svg, &targets))
}
