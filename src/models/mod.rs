use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Sentinel substituted for missing post titles at the recommendation boundary
pub const NO_TITLE_SENTINEL: &str = "No Title Available";

/// Declared user mood attached to each interaction row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Energetic,
    Neutral,
}

impl Mood {
    /// All declared moods, used by mood-assignment strategies
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Calm, Mood::Energetic, Mood::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Neutral => "neutral",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One user/post interaction row from the refined table
///
/// Rows are not unique: a user may have several rows for the same
/// category/mood combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub post_id: i64,
    /// Missing titles stay `None` through staging and normalization; the
    /// sentinel is substituted only at the recommendation boundary.
    pub post_title: Option<String>,
    pub username: String,
    pub category_id: i64,
    pub mood: Mood,
    pub average_rating_scaled: f64,
}

/// A recommended post returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub post_id: i64,
    pub post_title: String,
}

/// Category identifier as received from a client, either numeric or textual
///
/// Clients send `category_id` as a JSON number or a string; coercion failures
/// degrade to an empty recommendation result rather than a request error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryParam {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CategoryParam {
    /// Coerce to an integer category id, `None` when coercion fails
    pub fn coerce(&self) -> Option<i64> {
        match self {
            CategoryParam::Int(id) => Some(*id),
            CategoryParam::Float(id) if id.is_finite() => Some(*id as i64),
            CategoryParam::Float(_) => None,
            CategoryParam::Text(raw) => raw.trim().parse::<i64>().ok(),
        }
    }
}
