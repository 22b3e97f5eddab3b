use serde::Serialize;
use tracing::{debug, info};

use crate::config::ChartVariant;
use crate::types::Game;

/// One predicate of the display-set filter. Stages run in the configured
/// order, each over the survivors of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterStage {
    /// Keep games whose release year sorts after `cutoff_year`.
    ///
    /// The comparison is on strings, which matches numeric ordering for
    /// four-digit years. A year token that is not exactly four ASCII digits,
    /// such as `"TBA"`, fails the stage.
    Recency { cutoff_year: u16 },
    /// Keep games whose publisher exactly matches an allow-list entry
    Publisher { allow_list: Vec<String> },
    /// Keep games with strictly more than `min_total` user reviews
    ReviewVolume { min_total: u32 },
    /// Drop games by exact title
    ManualExclusion { titles: Vec<String> },
}

impl FilterStage {
    pub fn stage_name(&self) -> &'static str {
        match self {
            FilterStage::Recency { .. } => "recency",
            FilterStage::Publisher { .. } => "publisher",
            FilterStage::ReviewVolume { .. } => "review_volume",
            FilterStage::ManualExclusion { .. } => "manual_exclusion",
        }
    }

    /// Whether `game` survives this stage. Undefined inputs fail the predicate.
    pub fn keeps(&self, game: &Game) -> bool {
        match self {
            FilterStage::Recency { cutoff_year } => {
                let cutoff = format!("{:04}", cutoff_year);
                game.release_year().map_or(false, |year| {
                    is_four_digit_year(&year) && year.as_str() > cutoff.as_str()
                })
            }
            FilterStage::Publisher { allow_list } => game
                .publisher
                .as_deref()
                .map_or(false, |publisher| allow_list.iter().any(|p| p == publisher)),
            FilterStage::ReviewVolume { min_total } => game
                .user_reviews
                .and_then(|reviews| reviews.total)
                .map_or(false, |total| total > *min_total),
            FilterStage::ManualExclusion { titles } => game
                .name
                .as_deref()
                .map_or(true, |name| !titles.iter().any(|t| t == name)),
        }
    }
}

fn is_four_digit_year(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}

/// Survivor count after a single stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: &'static str,
    pub survivors: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub input: usize,
    pub stages: Vec<StageCount>,
}

impl FilterReport {
    pub fn output(&self) -> usize {
        self.stages.last().map_or(self.input, |s| s.survivors)
    }
}

/// Filtered view over a loaded game list, plus per-stage counts
#[derive(Debug)]
pub struct DisplaySet<'a> {
    pub games: Vec<&'a Game>,
    pub report: FilterReport,
}

/// Ordered sequence of filter stages for one chart variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPipeline {
    stages: Vec<FilterStage>,
}

impl FilterPipeline {
    pub fn new(stages: Vec<FilterStage>) -> Self {
        Self { stages }
    }

    /// Build the stage list described by a chart variant.
    ///
    /// The review-volume stage is only present when the variant sets
    /// `min_user_reviews`; manual exclusion is skipped when no titles are listed.
    pub fn for_variant(variant: &ChartVariant) -> Self {
        let mut stages = vec![
            FilterStage::Recency {
                cutoff_year: variant.cutoff_year,
            },
            FilterStage::Publisher {
                allow_list: variant.publishers.clone(),
            },
        ];
        if let Some(min_total) = variant.min_user_reviews {
            stages.push(FilterStage::ReviewVolume { min_total });
        }
        if !variant.excluded_titles.is_empty() {
            stages.push(FilterStage::ManualExclusion {
                titles: variant.excluded_titles.clone(),
            });
        }
        Self::new(stages)
    }

    pub fn stages(&self) -> &[FilterStage] {
        &self.stages
    }

    /// Run every stage and keep the per-stage survivor counts.
    pub fn run<'a>(&self, games: &'a [Game]) -> DisplaySet<'a> {
        let mut survivors: Vec<&'a Game> = games.iter().collect();
        let mut counts = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let before = survivors.len();
            survivors.retain(|game| stage.keeps(game));
            debug!(
                stage = stage.stage_name(),
                before,
                after = survivors.len(),
                "Applied filter stage"
            );
            counts.push(StageCount {
                stage: stage.stage_name(),
                survivors: survivors.len(),
            });
        }

        info!(input = games.len(), output = survivors.len(), "Selected display set");
        DisplaySet {
            games: survivors,
            report: FilterReport {
                input: games.len(),
                stages: counts,
            },
        }
    }

    /// Order-preserving sub-selection of `games` that passes every stage
    pub fn select_display_set<'a>(&self, games: &'a [Game]) -> Vec<&'a Game> {
        self.run(games).games
    }
}
