//! Offline ingest: fetch the viewed-posts feed, refine it into the
//! interaction table, and stage it as CSV for the serving layer.

use moodlens_api::config::Config;
use moodlens_api::data::{refine, Dataset, FeedClient, FeedSource, PostFeed, RandomMoodAssigner};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let client = FeedClient::new(config.feed_api_url.clone(), config.feed_api_token.clone());
    let raw_posts = client
        .fetch_all(PostFeed::Viewed, config.feed_page_size)
        .await?;

    let interactions = refine(raw_posts, &RandomMoodAssigner);
    if interactions.is_empty() {
        tracing::warn!("No usable records after refinement, nothing to stage");
        return Ok(());
    }

    let dataset = Dataset::from_interactions(interactions);
    dataset.save(&config.dataset_path)?;

    tracing::info!(
        rows = dataset.len(),
        path = %config.dataset_path,
        "Ingest complete"
    );
    Ok(())
}
