use crate::data::Dataset;
use crate::models::{CategoryParam, Recommendation, NO_TITLE_SENTINEL};

/// Returns the posts a user interacted with under an exact category and mood.
///
/// A stateless query over the in-memory table: no re-ranking, no dedup, no
/// limit. Matches come back in the dataset's existing row order. Malformed
/// category identifiers degrade to an empty result rather than an error, so
/// the serving boundary stays tolerant of sloppy callers.
///
/// Missing titles are replaced with the [`NO_TITLE_SENTINEL`] on the returned
/// view only; the source dataset keeps its nulls so similarity computation
/// elsewhere still sees the best-available text.
pub fn select(
    dataset: &Dataset,
    username: &str,
    category: &CategoryParam,
    mood: &str,
) -> Vec<Recommendation> {
    let Some(category_id) = category.coerce() else {
        tracing::debug!(category = ?category, "Invalid category id, returning no matches");
        return Vec::new();
    };

    dataset
        .interactions()
        .iter()
        .filter(|row| {
            row.username == username && row.category_id == category_id && row.mood.as_str() == mood
        })
        .map(|row| Recommendation {
            post_id: row.post_id,
            post_title: row
                .post_title
                .clone()
                .unwrap_or_else(|| NO_TITLE_SENTINEL.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interaction, Mood};

    fn row(
        post_id: i64,
        title: Option<&str>,
        username: &str,
        category_id: i64,
        mood: Mood,
    ) -> Interaction {
        Interaction {
            post_id,
            post_title: title.map(String::from),
            username: username.to_string(),
            category_id,
            mood,
            average_rating_scaled: 0.5,
        }
    }

    fn dataset(rows: Vec<Interaction>) -> Dataset {
        Dataset::from_interactions(rows)
    }

    #[test]
    fn test_select_exact_match() {
        let data = dataset(vec![
            row(1, Some("sunset"), "alice", 7, Mood::Happy),
            row(2, Some("city"), "bob", 7, Mood::Happy),
            row(3, Some("rain"), "alice", 7, Mood::Calm),
        ]);

        let result = select(&data, "alice", &CategoryParam::Int(7), "happy");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].post_id, 1);
        assert_eq!(result[0].post_title, "sunset");
    }

    #[test]
    fn test_select_missing_title_gets_sentinel() {
        let data = dataset(vec![row(42, None, "alice", 7, Mood::Happy)]);

        let result = select(&data, "alice", &CategoryParam::Int(7), "happy");
        assert_eq!(
            result,
            vec![Recommendation {
                post_id: 42,
                post_title: "No Title Available".to_string(),
            }]
        );
    }

    #[test]
    fn test_select_sentinel_does_not_mutate_source() {
        let data = dataset(vec![row(42, None, "alice", 7, Mood::Happy)]);

        let _ = select(&data, "alice", &CategoryParam::Int(7), "happy");
        assert_eq!(data.interactions()[0].post_title, None);
    }

    #[test]
    fn test_select_malformed_category_returns_empty() {
        let data = dataset(vec![row(1, Some("sunset"), "alice", 7, Mood::Happy)]);

        let category = CategoryParam::Text("not-a-number".to_string());
        assert!(select(&data, "alice", &category, "happy").is_empty());
    }

    #[test]
    fn test_select_string_category_coerces() {
        let data = dataset(vec![row(1, Some("sunset"), "alice", 7, Mood::Happy)]);

        let category = CategoryParam::Text("7".to_string());
        assert_eq!(select(&data, "alice", &category, "happy").len(), 1);
    }

    #[test]
    fn test_select_no_match_returns_empty() {
        let data = dataset(vec![row(1, Some("sunset"), "alice", 7, Mood::Happy)]);

        assert!(select(&data, "alice", &CategoryParam::Int(8), "happy").is_empty());
        assert!(select(&data, "mallory", &CategoryParam::Int(7), "happy").is_empty());
        assert!(select(&data, "alice", &CategoryParam::Int(7), "calm").is_empty());
        assert!(select(&data, "alice", &CategoryParam::Int(7), "no-such-mood").is_empty());
    }

    #[test]
    fn test_select_preserves_row_order_and_duplicates() {
        let data = dataset(vec![
            row(5, Some("first"), "alice", 7, Mood::Happy),
            row(3, Some("second"), "alice", 7, Mood::Happy),
            row(5, Some("first"), "alice", 7, Mood::Happy),
        ]);

        let result = select(&data, "alice", &CategoryParam::Int(7), "happy");
        let ids: Vec<i64> = result.iter().map(|r| r.post_id).collect();
        assert_eq!(ids, vec![5, 3, 5]);
    }
}
