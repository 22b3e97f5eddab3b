/// Built-in chart variant names and their curated configuration lists.
/// These seed the default `ChartsConfig`; the filter code never reads them directly.

// Variant names (used in CLI)
pub const BAR_VARIANT: &str = "bar";
pub const BUBBLE_VARIANT: &str = "bubble";

pub const DEFAULT_DATA_FILE: &str = "./metacritic_games.json";
pub const DEFAULT_CONFIG_FILE: &str = "charts.toml";

pub const BAR_TITLE: &str = "Popular Game Releases in 2018";
pub const BAR_CUTOFF_YEAR: u16 = 2017;
pub const BAR_MIN_USER_REVIEWS: u32 = 20;

// Bad data point in the 2018 set
pub const BAR_EXCLUDED_TITLES: &[&str] = &["The Quiet Man"];

pub const BAR_PUBLISHERS: &[&str] = &[
    "Blizzard Entertainment",
    "Disney Interactive Studios",
    "EA Sports",
    "Capcom",
    "EA Games",
    "Activision",
    "Rockstar Games",
    "Square Enix",
    "Namco Bandai Games",
    "Sega",
    "Microsoft Game Studios",
    "Ubisoft",
    "Nintendo",
    "Electronic Arts",
    "Bethesda Softworks",
    "Valve Software",
];

pub const BUBBLE_TITLE: &str = "Game Releases 2011-2020 by Metascore";
pub const BUBBLE_CUTOFF_YEAR: u16 = 2010;

pub const BUBBLE_PUBLISHERS: &[&str] = &[
    "Jackbox Games, Inc.",
    "Bandai Namco Games",
    "Blizzard Entertainment",
    "Disney Interactive Studios",
    "Telltale Games",
    "Deep Silver",
    "Paradox Interactive",
    "NIS America",
    "EA Sports",
    "PopCap",
    "Capcom",
    "EA Games",
    "Atari",
    "Activision",
    "Zen Studios",
    "Rockstar Games",
    "Square Enix",
    "Namco Bandai Games",
    "Sega",
    "Konami",
    "Microsoft Game Studios",
    "2K Sports",
    "Ubisoft",
    "SCEA",
    "Nintendo",
    "Electronic Arts",
    "Warner Bros. Interactive Entertainment",
    "Bethesda Softworks",
    "Valve Software",
];

// Bar chart canvas
pub const BAR_WIDTH: u32 = 3500;
pub const BAR_HEIGHT: u32 = 925;
pub const BAR_MARGIN: u32 = 60;

// Bubble chart canvas
pub const BUBBLE_WIDTH: u32 = 1200;
pub const BUBBLE_HEIGHT: u32 = 1200;
pub const BUBBLE_PADDING: u32 = 10;

/// Fixed y domain of the bar chart score axis
pub const SCORE_AXIS_MIN: f64 = 50.0;
pub const SCORE_AXIS_MAX: f64 = 100.0;

pub const Y_AXIS_LABEL: &str = "MetaCritic Score";
pub const X_AXIS_LABEL: &str = "Games";

/// Get all built-in variant names
pub fn get_builtin_variants() -> Vec<&'static str> {
    vec![BAR_VARIANT, BUBBLE_VARIANT]
}
