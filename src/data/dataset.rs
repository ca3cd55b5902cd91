use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult};
use crate::models::Interaction;

/// In-memory snapshot of the refined interaction table.
///
/// Loaded whole; the table is bounded to single-digit thousands of rows, so
/// there is no streaming or partial load. A snapshot is never mutated after
/// loading; refreshes produce a new snapshot that replaces the handle.
#[derive(Debug, Clone)]
pub struct Dataset {
    interactions: Vec<Interaction>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Loads the refined table from a CSV file.
    ///
    /// An absent file is a distinct, recoverable condition
    /// ([`AppError::DatasetNotFound`]); the serving boundary degrades it to an
    /// empty recommendation result rather than a crash.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::DatasetNotFound(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let interactions = reader
            .deserialize()
            .collect::<Result<Vec<Interaction>, _>>()?;

        tracing::info!(
            rows = interactions.len(),
            path = %path.display(),
            "Dataset loaded"
        );

        Ok(Self::from_interactions(interactions))
    }

    /// Wraps an already-built set of rows into a snapshot
    pub fn from_interactions(interactions: Vec<Interaction>) -> Self {
        Self {
            interactions,
            loaded_at: Utc::now(),
        }
    }

    /// Writes the table as CSV, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        for row in &self.interactions {
            writer.serialize(row)?;
        }
        writer.flush()?;

        tracing::info!(
            rows = self.interactions.len(),
            path = %path.display(),
            "Dataset saved"
        );
        Ok(())
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Title corpus in row order, missing titles as empty strings.
    ///
    /// The empty-string substitution happens here so the text normalizer never
    /// receives a missing value; the sentinel title is a separate concern at
    /// the recommendation boundary.
    pub fn title_corpus(&self) -> Vec<String> {
        self.interactions
            .iter()
            .map(|row| row.post_title.clone().unwrap_or_default())
            .collect()
    }

    /// Normalized rating signal in row order, used as evaluation ground truth
    pub fn scaled_ratings(&self) -> Vec<f64> {
        self.interactions
            .iter()
            .map(|row| row.average_rating_scaled)
            .collect()
    }
}
