use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::constants;
use crate::error::ConfigError;

/// Which presentation a variant draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Bubble,
}

/// Key used by the ordinal color scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBy {
    Platform,
    Score,
}

/// Canvas geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub margin: u32,
    #[serde(default)]
    pub padding: u32,
}

impl Layout {
    pub fn default_for(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => Self {
                width: constants::BAR_WIDTH,
                height: constants::BAR_HEIGHT,
                margin: constants::BAR_MARGIN,
                padding: 0,
            },
            ChartKind::Bubble => Self {
                width: constants::BUBBLE_WIDTH,
                height: constants::BUBBLE_HEIGHT,
                margin: 0,
                padding: constants::BUBBLE_PADDING,
            },
        }
    }
}

/// A named chart presentation: the filter configuration plus how to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartVariant {
    pub name: String,
    pub kind: ChartKind,
    pub title: String,
    #[serde(default = "default_data")]
    pub data: String,
    pub cutoff_year: u16,
    pub publishers: Vec<String>,
    /// When absent the review-volume stage is left out of the pipeline
    #[serde(default)]
    pub min_user_reviews: Option<u32>,
    #[serde(default)]
    pub excluded_titles: Vec<String>,
    pub color_by: ColorBy,
    #[serde(default)]
    pub layout: Option<Layout>,
}

fn default_data() -> String {
    constants::DEFAULT_DATA_FILE.to_string()
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl ChartVariant {
    /// Grouped bar chart of recent, well-reviewed releases, colored by platform
    pub fn bar() -> Self {
        Self {
            name: constants::BAR_VARIANT.to_string(),
            kind: ChartKind::Bar,
            title: constants::BAR_TITLE.to_string(),
            data: default_data(),
            cutoff_year: constants::BAR_CUTOFF_YEAR,
            publishers: owned(constants::BAR_PUBLISHERS),
            min_user_reviews: Some(constants::BAR_MIN_USER_REVIEWS),
            excluded_titles: owned(constants::BAR_EXCLUDED_TITLES),
            color_by: ColorBy::Platform,
            layout: None,
        }
    }

    /// Circle-packing chart over a decade of releases, colored by score
    pub fn bubble() -> Self {
        Self {
            name: constants::BUBBLE_VARIANT.to_string(),
            kind: ChartKind::Bubble,
            title: constants::BUBBLE_TITLE.to_string(),
            data: default_data(),
            cutoff_year: constants::BUBBLE_CUTOFF_YEAR,
            publishers: owned(constants::BUBBLE_PUBLISHERS),
            min_user_reviews: None,
            excluded_titles: Vec::new(),
            color_by: ColorBy::Score,
            layout: None,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout.unwrap_or_else(|| Layout::default_for(self.kind))
    }
}

/// Top-level chart configuration, usually read from `charts.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartsConfig {
    pub variants: Vec<ChartVariant>,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ChartsConfig {
    pub fn builtin() -> Self {
        Self {
            variants: vec![ChartVariant::bar(), ChartVariant::bubble()],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ChartsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), variants = config.variants.len(), "Loaded chart config");
        Ok(config)
    }

    /// Load an explicit config file, else `charts.toml` if present, else the built-ins.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = Path::new(constants::DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::load(default_path);
        }
        debug!("No chart config file found, using built-in variants");
        Ok(Self::builtin())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.name.as_str()) {
                return Err(ConfigError::DuplicateVariant(variant.name.clone()));
            }
        }
        Ok(())
    }

    pub fn variant(&self, name: &str) -> Result<&ChartVariant, ConfigError> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| ConfigError::UnknownVariant(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_variants() {
        let config = ChartsConfig::builtin();
        let names: Vec<&str> = config.variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, constants::get_builtin_variants());

        let bar = config.variant("bar").unwrap();
        assert_eq!(bar.cutoff_year, 2017);
        assert_eq!(bar.min_user_reviews, Some(20));
        assert_eq!(bar.excluded_titles, vec!["The Quiet Man".to_string()]);
        assert_eq!(bar.publishers.len(), 16);
        assert_eq!(bar.layout().width, 3500);

        let bubble = config.variant("bubble").unwrap();
        assert_eq!(bubble.cutoff_year, 2010);
        assert_eq!(bubble.min_user_reviews, None);
        assert_eq!(bubble.publishers.len(), 29);
        assert_eq!(bubble.color_by, ColorBy::Score);
    }

    #[test]
    fn test_parse_toml_variants() {
        let config = ChartsConfig::from_toml_str(
            r#"
            [[variants]]
            name = "indie"
            kind = "bar"
            title = "Indie hits"
            data = "https://example.com/games.json"
            cutoff_year = 2015
            publishers = ["Devolver Digital", "Annapurna Interactive"]
            min_user_reviews = 5
            excluded_titles = ["Bad Entry"]
            color_by = "score"

            [variants.layout]
            width = 800
            height = 400
            margin = 20

            [[variants]]
            name = "packed"
            kind = "bubble"
            title = "Packed"
            cutoff_year = 2000
            publishers = []
            color_by = "platform"
            "#,
        )
        .unwrap();

        let indie = config.variant("indie").unwrap();
        assert_eq!(indie.kind, ChartKind::Bar);
        assert_eq!(indie.min_user_reviews, Some(5));
        assert_eq!(indie.layout().margin, 20);
        assert_eq!(indie.layout().padding, 0);

        let packed = config.variant("packed").unwrap();
        assert_eq!(packed.data, constants::DEFAULT_DATA_FILE);
        assert!(packed.publishers.is_empty());
        assert!(packed.excluded_titles.is_empty());
        assert_eq!(packed.layout(), Layout::default_for(ChartKind::Bubble));
    }

    #[test]
    fn test_example_config_parses() {
        let config = ChartsConfig::from_toml_str(include_str!("../charts.example.toml")).unwrap();
        assert_eq!(config.variant("bar").unwrap(), &ChartVariant {
            layout: Some(Layout::default_for(ChartKind::Bar)),
            ..ChartVariant::bar()
        });
        assert_eq!(config.variant("nintendo-bubbles").unwrap().publishers, vec!["Nintendo"]);
    }

    #[test]
    fn test_unknown_variant_is_error() {
        let config = ChartsConfig::builtin();
        assert!(matches!(
            config.variant("pie"),
            Err(ConfigError::UnknownVariant(name)) if name == "pie"
        ));
    }

    #[test]
    fn test_duplicate_variant_is_rejected() {
        let mut config = ChartsConfig::builtin();
        config.variants.push(ChartVariant::bar());
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateVariant(_))));
    }
}
