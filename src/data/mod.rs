pub mod dataset;
pub mod feed;
pub mod mood;
pub mod refine;

pub use dataset::Dataset;
pub use feed::{FeedClient, FeedPage, FeedSource, PostFeed, RawCategory, RawPost};
pub use mood::{MoodAssigner, RandomMoodAssigner};
pub use refine::refine;
