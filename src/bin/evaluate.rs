//! Offline quality run: vectorize the staged title corpus, compute the
//! pairwise similarity matrix, and score similarity-derived predictions
//! against the normalized rating signal.
//!
//! Any validation failure aborts the run; a bad feature matrix means an
//! upstream data-quality defect, not something to score around.

use moodlens_api::config::Config;
use moodlens_api::data::Dataset;
use moodlens_api::services::{evaluate, similarity, text, TfidfVectorizer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let dataset = Dataset::load(&config.dataset_path)?;

    let corpus: Vec<String> = dataset
        .title_corpus()
        .iter()
        .map(|title| text::clean(title))
        .collect();

    let features = TfidfVectorizer::fit_transform(&corpus);
    similarity::validate(&features)?;

    tracing::info!(
        rows = features.nrows(),
        terms = features.ncols(),
        "Feature matrix built"
    );

    let similarity_matrix = similarity::similarity_matrix(&features);
    let quality = evaluate(&dataset.scaled_ratings(), &similarity_matrix)?;

    tracing::info!(mae = quality.mae, rmse = quality.rmse, "Evaluation complete");
    Ok(())
}
