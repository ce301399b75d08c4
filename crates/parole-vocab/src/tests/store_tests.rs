use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use crate::{JsonFileStore, MemoryStore, RatingStore, StoreError, WordRating};

fn sample() -> BTreeMap<String, WordRating> {
    let mut ratings = BTreeMap::new();
    ratings.insert(
        "maison".to_string(),
        WordRating {
            stars: 3,
            last_updated: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            occurrences: 7,
        },
    );
    ratings
}

#[tokio::test]
async fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("vocabulary.json"));

    let ratings = store.load().await.unwrap();
    assert!(ratings.is_empty());
}

#[tokio::test]
async fn json_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("vocabulary.json"));

    store.save(&sample()).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, sample());
}

#[tokio::test]
async fn json_file_uses_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");
    let store = JsonFileStore::new(&path);

    store.save(&sample()).await.unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();

    assert!(raw.contains("\"lastUpdated\""));
    assert!(raw.contains("\"occurrences\": 7"));
}

#[tokio::test]
async fn malformed_file_is_a_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");
    std::fs::write(&path, "not json").unwrap();

    let err = JsonFileStore::new(&path).load().await.unwrap_err();
    assert!(matches!(err, StoreError::Serde(_)));
}

#[tokio::test]
async fn memory_store_counts_saves() {
    let store = MemoryStore::new();
    assert_eq!(store.save_count().await, 0);

    store.save(&sample()).await.unwrap();
    store.save(&sample()).await.unwrap();

    assert_eq!(store.save_count().await, 2);
    assert_eq!(store.snapshot().await, sample());
}
