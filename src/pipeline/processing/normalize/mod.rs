use crate::types::{CriticReviews, Game, RawGameRecord, UserReviews};

/// Map a raw record onto the canonical `Game` shape.
///
/// Total: missing or malformed inputs stay `None` on the output instead of
/// failing. `user_reviews` is only populated when the record carries at least
/// one user review count, since some dataset shapes omit them entirely.
pub fn normalize(raw: &RawGameRecord) -> Game {
    let has_user_counts =
        raw.user_positive.is_some() || raw.user_negative.is_some() || raw.user_neutral.is_some();
    let user_reviews = has_user_counts
        .then(|| UserReviews::new(raw.user_positive, raw.user_negative, raw.user_neutral));

    Game {
        name: raw.name.clone(),
        platform: raw.platform.clone(),
        developer: raw.developer.clone(),
        publisher: raw.publisher.clone(),
        esrb: raw.rating.clone(),
        release: raw.release_date.clone(),
        critic_reviews: CriticReviews {
            positive: raw.critic_positive,
            negative: raw.critic_negative,
            neutral: raw.critic_neutral,
        },
        score: raw.metascore,
        user_average: raw.user_score,
        user_reviews,
    }
}

pub fn normalize_all(records: &[RawGameRecord]) -> Vec<Game> {
    records.iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawGameRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_all_absent_record_normalizes() {
        let game = normalize(&RawGameRecord::default());
        assert_eq!(game.name, None);
        assert_eq!(game.release, None);
        assert_eq!(game.score, None);
        assert_eq!(game.critic_reviews, CriticReviews::default());
        assert_eq!(game.user_reviews, None);
    }

    #[test]
    fn test_fields_are_renamed_unchanged() {
        let record = raw(json!({
            "name": "God of War",
            "platform": "PS4",
            "developer": "SCE Santa Monica",
            "publisher": "SCEA",
            "rating": "M",
            "release_date": "Apr 20, 2018",
            "critic_positive": 116,
            "critic_neutral": 2,
            "critic_negative": 0,
            "metascore": 94,
            "user_score": 9.1,
            "user_positive": 4000,
            "user_negative": 300,
            "user_neutral": 150
        }));
        let game = normalize(&record);

        assert_eq!(game.name.as_deref(), Some("God of War"));
        assert_eq!(game.platform.as_deref(), Some("PS4"));
        assert_eq!(game.developer.as_deref(), Some("SCE Santa Monica"));
        assert_eq!(game.publisher.as_deref(), Some("SCEA"));
        assert_eq!(game.esrb.as_deref(), Some("M"));
        assert_eq!(game.release.as_deref(), Some("Apr 20, 2018"));
        assert_eq!(
            game.critic_reviews,
            CriticReviews { positive: Some(116), negative: Some(0), neutral: Some(2) }
        );
        assert_eq!(game.score, Some(94.0));
        assert_eq!(game.user_average, Some(9.1));

        let users = game.user_reviews.unwrap();
        assert_eq!(users.positive, Some(4000));
        assert_eq!(users.negative, Some(300));
        assert_eq!(users.neutral, Some(150));
        assert_eq!(users.total, Some(4450));
    }

    #[test]
    fn test_numeric_strings_are_added_not_joined() {
        let game = normalize(&raw(json!({
            "user_positive": "5",
            "user_negative": "5",
            "user_neutral": 5
        })));
        assert_eq!(game.user_reviews.unwrap().total, Some(15));
    }

    #[test]
    fn test_missing_user_component_leaves_total_undefined() {
        let game = normalize(&raw(json!({
            "user_positive": 10,
            "user_neutral": 3
        })));
        let users = game.user_reviews.unwrap();
        assert_eq!(users.negative, None);
        assert_eq!(users.total, None);
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let records = vec![
            raw(json!({"name": "B"})),
            raw(json!({"name": "A"})),
            raw(json!({"name": "C"})),
        ];
        let names: Vec<_> = normalize_all(&records)
            .into_iter()
            .map(|g| g.name.unwrap())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
