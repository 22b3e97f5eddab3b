use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw game record as it appears in the Metacritic JSON dump.
///
/// Every field is optional and deserializes leniently: a field with an
/// unexpected JSON type becomes `None` instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawGameRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub developer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub critic_positive: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub critic_neutral: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub critic_negative: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub metascore: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub user_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub user_positive: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub user_negative: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub user_neutral: Option<u32>,
}

/// Critic review counts; each component is `None` when the source omitted it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CriticReviews {
    pub positive: Option<u32>,
    pub negative: Option<u32>,
    pub neutral: Option<u32>,
}

/// User review counts. `total` is the sum of the three components and is
/// `None` whenever any of them is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserReviews {
    pub positive: Option<u32>,
    pub negative: Option<u32>,
    pub neutral: Option<u32>,
    pub total: Option<u32>,
}

impl UserReviews {
    pub fn new(positive: Option<u32>, negative: Option<u32>, neutral: Option<u32>) -> Self {
        let total = match (positive, negative, neutral) {
            (Some(p), Some(n), Some(u)) => p.checked_add(n).and_then(|s| s.checked_add(u)),
            _ => None,
        };
        Self {
            positive,
            negative,
            neutral,
            total,
        }
    }
}

/// Canonical, immutable game entity used by filtering and rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub esrb: Option<String>,
    pub release: Option<String>,
    pub critic_reviews: CriticReviews,
    pub score: Option<f64>,
    pub user_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_reviews: Option<UserReviews>,
}

const RELEASE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%m/%d/%Y"];

impl Game {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(untitled)")
    }

    /// Year token of `release`, compared as a string by the recency filter.
    ///
    /// Known date formats yield a zero-padded four-digit year. Anything else
    /// falls back to the trailing four characters (or the whole string when
    /// shorter), which is only meaningful for strings ending in a year.
    pub fn release_year(&self) -> Option<String> {
        let release = self.release.as_deref()?.trim();
        let parsed = RELEASE_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(release, fmt).ok());
        if let Some(date) = parsed {
            return Some(format!("{:04}", date.year()));
        }
        let chars: Vec<char> = release.chars().collect();
        let start = chars.len().saturating_sub(4);
        Some(chars[start..].iter().collect())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn value_as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_f64)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}
