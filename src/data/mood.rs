use rand::Rng;

use crate::data::feed::RawPost;
use crate::models::Mood;

/// Strategy for attaching a mood to a raw post during ingest.
///
/// Pluggable so a trained mood classifier can replace the placeholder
/// strategy without touching the selector or the ingest pipeline.
pub trait MoodAssigner: Send + Sync {
    fn assign(&self, post: &RawPost) -> Mood;
}

/// Uniform random mood assignment, the placeholder strategy
pub struct RandomMoodAssigner;

impl MoodAssigner for RandomMoodAssigner {
    fn assign(&self, _post: &RawPost) -> Mood {
        let index = rand::thread_rng().gen_range(0..Mood::ALL.len());
        Mood::ALL[index]
    }
}
