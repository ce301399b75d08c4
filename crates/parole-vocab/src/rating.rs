use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Learner confidence for a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRating {
    /// 0 (unrated) to 5
    pub stars: u8,
    pub last_updated: DateTime<Utc>,
    /// How many times indexing has seen the word
    pub occurrences: u32,
}

impl WordRating {
    /// First sighting of a word during indexing
    pub fn first_seen(now: DateTime<Utc>) -> Self {
        Self {
            stars: 0,
            last_updated: now,
            occurrences: 1,
        }
    }

    /// Word rated before it was ever indexed
    pub fn unseen(now: DateTime<Utc>) -> Self {
        Self {
            stars: 0,
            last_updated: now,
            occurrences: 0,
        }
    }
}
