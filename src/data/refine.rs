use crate::data::feed::RawPost;
use crate::data::mood::MoodAssigner;
use crate::models::Interaction;

/// Refines raw feed posts into the interaction table the engine consumes.
///
/// Drops records missing a post id, title, or parseable category (an
/// unparseable category could never match an integer-coerced filter), min-max
/// scales the rating signal into [0, 1], and attaches a mood. A mood already
/// present on the record is preserved; only records without one go through
/// the assigner.
pub fn refine(raw_posts: Vec<RawPost>, assigner: &dyn MoodAssigner) -> Vec<Interaction> {
    let total = raw_posts.len();

    let kept: Vec<RawPost> = raw_posts
        .into_iter()
        .filter(|post| {
            post.id.is_some()
                && post.title.is_some()
                && post.category.as_ref().and_then(|c| c.id).is_some()
        })
        .collect();

    if kept.len() < total {
        tracing::warn!(
            dropped = total - kept.len(),
            kept = kept.len(),
            "Dropped records missing id, title, or category"
        );
    }

    let ratings: Vec<f64> = kept
        .iter()
        .map(|post| post.average_rating.unwrap_or(0.0))
        .collect();
    let scaled = min_max_scale(&ratings);

    kept.into_iter()
        .zip(scaled)
        .map(|(post, average_rating_scaled)| {
            let mood = post.mood.unwrap_or_else(|| assigner.assign(&post));
            Interaction {
                post_id: post.id.unwrap_or_default(),
                post_title: post.title,
                username: post.username.unwrap_or_default(),
                category_id: post
                    .category
                    .as_ref()
                    .and_then(|c| c.id)
                    .unwrap_or_default(),
                mood,
                average_rating_scaled,
            }
        })
        .collect()
}

/// Min-max scaling into [0, 1]; a constant column scales to all zeros
fn min_max_scale(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || max <= min {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v - min) / (max - min)).collect()
}
