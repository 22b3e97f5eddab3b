use plotters::style::RGBColor;

use crate::config::ColorBy;
use crate::types::Game;

pub const SET2: &[RGBColor] = &[
    RGBColor(0x66, 0xc2, 0xa5),
    RGBColor(0xfc, 0x8d, 0x62),
    RGBColor(0x8d, 0xa0, 0xcb),
    RGBColor(0xe7, 0x8a, 0xc3),
    RGBColor(0xa6, 0xd8, 0x54),
    RGBColor(0xff, 0xd9, 0x2f),
    RGBColor(0xe5, 0xc4, 0x94),
    RGBColor(0xb3, 0xb3, 0xb3),
];

pub const CATEGORY10: &[RGBColor] = &[
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Score as shown in labels and color keys: integral scores without a fraction
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.fract() == 0.0 => format!("{}", s as i64),
        Some(s) => format!("{:.1}", s),
        None => "n/a".to_string(),
    }
}

/// Ordinal color scale: keys get palette entries in first-seen order,
/// wrapping around when the palette runs out.
#[derive(Debug, Clone)]
pub struct OrdinalColorScale {
    color_by: ColorBy,
    keys: Vec<String>,
    palette: &'static [RGBColor],
}

impl OrdinalColorScale {
    pub fn for_games(games: &[&Game], color_by: ColorBy) -> Self {
        let palette = match color_by {
            ColorBy::Platform => SET2,
            ColorBy::Score => CATEGORY10,
        };
        let mut keys: Vec<String> = Vec::new();
        for game in games {
            let key = Self::key_of(color_by, game);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        Self {
            color_by,
            keys,
            palette,
        }
    }

    fn key_of(color_by: ColorBy, game: &Game) -> String {
        match color_by {
            ColorBy::Platform => game.platform.clone().unwrap_or_default(),
            ColorBy::Score => format_score(game.score),
        }
    }

    pub fn color(&self, game: &Game) -> RGBColor {
        let key = Self::key_of(self.color_by, game);
        let index = self.keys.iter().position(|k| *k == key).unwrap_or(0);
        self.palette[index % self.palette.len()]
    }
}

/// Darken by one step (each channel scaled by 0.7)
pub fn darker(color: RGBColor) -> RGBColor {
    let scale = |c: u8| (c as f64 * 0.7).round() as u8;
    RGBColor(scale(color.0), scale(color.1), scale(color.2))
}
