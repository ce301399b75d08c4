pub mod export;
pub mod rating;
pub mod store;
pub mod vocabulary;

pub use rating::WordRating;
pub use store::{JsonFileStore, MemoryStore, RatingStore, StoreError};
pub use vocabulary::{MAX_STARS, VocabError, Vocabulary, VocabularyStore};

#[cfg(test)]
mod tests;
