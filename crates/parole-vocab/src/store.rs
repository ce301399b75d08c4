use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::rating::WordRating;

pub type Ratings = BTreeMap<String, WordRating>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed rating data: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Persistence backend for vocabulary ratings
#[async_trait::async_trait]
pub trait RatingStore: Send + Sync {
    /// Read every stored rating
    async fn load(&self) -> Result<Ratings, StoreError>;

    /// Replace the stored ratings with `ratings`
    async fn save(&self, ratings: &Ratings) -> Result<(), StoreError>;
}

/// Ratings kept as a pretty-printed JSON object on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl RatingStore for JsonFileStore {
    async fn load(&self) -> Result<Ratings, StoreError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No vocabulary file at {}, starting fresh", self.path.display());
                return Ok(Ratings::new());
            }
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(Ratings::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    async fn save(&self, ratings: &Ratings) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, serde_json::to_string_pretty(ratings)?).await?;
        tracing::debug!("Saved {} ratings to {}", ratings.len(), self.path.display());
        Ok(())
    }
}

/// In-process store, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    ratings: Mutex<Ratings>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratings(ratings: Ratings) -> Self {
        Self {
            ratings: Mutex::new(ratings),
            saves: Mutex::new(0),
        }
    }

    /// Snapshot of what was last saved
    pub async fn snapshot(&self) -> Ratings {
        self.ratings.lock().await.clone()
    }

    pub async fn save_count(&self) -> usize {
        *self.saves.lock().await
    }
}

#[async_trait::async_trait]
impl RatingStore for MemoryStore {
    async fn load(&self) -> Result<Ratings, StoreError> {
        Ok(self.ratings.lock().await.clone())
    }

    async fn save(&self, ratings: &Ratings) -> Result<(), StoreError> {
        *self.ratings.lock().await = ratings.clone();
        *self.saves.lock().await += 1;
        Ok(())
    }
}
