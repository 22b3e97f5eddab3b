use crate::render::color::format_score;
use crate::types::Game;

/// Pixel-space hover area for one chart marker
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipShape {
    Rect { x: i32, y: i32, width: i32, height: i32 },
    Circle { cx: i32, cy: i32, r: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipTarget {
    pub shape: TooltipShape,
    pub text: String,
}

impl TooltipTarget {
    pub fn for_game(game: &Game, shape: TooltipShape) -> Self {
        let text = format!(
            "{}\n{}\n{}",
            game.display_name(),
            format_score(game.score),
            game.platform.as_deref().unwrap_or("")
        );
        Self { shape, text }
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Append transparent hover areas carrying `<title>` tooltips before the
/// closing `</svg>` tag.
pub fn annotate(mut svg: String, targets: &[TooltipTarget]) -> String {
    if targets.is_empty() {
        return svg;
    }
    let mut block = String::from("<g class=\"tooltips\">\n");
    for target in targets {
        let title = escape_xml(&target.text);
        match target.shape {
            TooltipShape::Rect { x, y, width, height } => block.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"transparent\"><title>{}</title></rect>\n",
                x, y, width, height, title
            )),
            TooltipShape::Circle { cx, cy, r } => block.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"transparent\"><title>{}</title></circle>\n",
                cx, cy, r, title
            )),
        }
    }
    block.push_str("</g>\n");

    match svg.rfind("</svg>") {
        Some(pos) => svg.insert_str(pos, &block),
        None => svg.push_str(&block),
    }
    svg
}
