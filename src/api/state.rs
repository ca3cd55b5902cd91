use std::sync::Arc;

use tokio::sync::RwLock;

use crate::data::Dataset;
use crate::error::AppResult;

/// Shared application state
///
/// Holds the current dataset snapshot behind an immutable handle. Request
/// handlers clone the inner `Arc` and read without further locking; the
/// reload step swaps the slot for a freshly loaded snapshot. A snapshot is
/// never mutated in place, so readers racing a reload always see a complete
/// table.
#[derive(Clone)]
pub struct AppState {
    dataset_path: Arc<str>,
    snapshot: Arc<RwLock<Option<Arc<Dataset>>>>,
}

impl AppState {
    /// Creates state with an empty snapshot slot; call [`reload`] to fill it
    ///
    /// [`reload`]: AppState::reload
    pub fn new(dataset_path: impl Into<String>) -> Self {
        Self {
            dataset_path: dataset_path.into().into(),
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// Current snapshot, if a dataset has been loaded
    pub async fn snapshot(&self) -> Option<Arc<Dataset>> {
        self.snapshot.read().await.clone()
    }

    /// Loads the dataset from the configured path and swaps it in.
    ///
    /// The load happens outside the write lock; on failure the previous
    /// snapshot stays in place. Returns the new row count.
    pub async fn reload(&self) -> AppResult<usize> {
        let dataset = Dataset::load(self.dataset_path.as_ref())?;
        let rows = dataset.len();
        *self.snapshot.write().await = Some(Arc::new(dataset));
        Ok(rows)
    }

    pub fn dataset_path(&self) -> &str {
        &self.dataset_path
    }
}
