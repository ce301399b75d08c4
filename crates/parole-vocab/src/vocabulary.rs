use chrono::Utc;
use parole_core::{LanguageProcessor, Morphology};
use tokio::sync::RwLock;

use crate::export;
use crate::rating::WordRating;
use crate::store::{RatingStore, Ratings, StoreError};

pub const MAX_STARS: u8 = 5;

pub type Vocabulary = Ratings;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("Invalid star rating {0} (expected 0..={MAX_STARS})")]
    InvalidStars(u8),

    #[error("Cannot rate an empty word")]
    EmptyWord,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Per-word ratings backed by an injected [`RatingStore`].
///
/// Every mutation is written through to the store before returning.
pub struct VocabularyStore<S: RatingStore> {
    store: S,
    words: RwLock<Vocabulary>,
}

impl<S: RatingStore> VocabularyStore<S> {
    /// Load existing ratings. A store that cannot be read yields an empty vocabulary.
    pub async fn open(store: S) -> Self {
        let words = match store.load().await {
            Ok(words) => {
                tracing::info!("Loaded {} vocabulary entries", words.len());
                words
            }
            Err(e) => {
                tracing::warn!("Failed to load vocabulary, starting empty: {}", e);
                Vocabulary::new()
            }
        };

        Self {
            store,
            words: RwLock::new(words),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record every valid word of `text` under its base form.
    ///
    /// Returns the number of tokens counted. Nothing is saved when no token
    /// qualifies.
    pub async fn index_words<P>(&self, text: &str, processor: &P) -> Result<usize, VocabError>
    where
        P: LanguageProcessor + Morphology,
    {
        self.index_texts([text], processor).await
    }

    /// Index many texts with a single save at the end
    pub async fn index_texts<'t, I, P>(&self, texts: I, processor: &P) -> Result<usize, VocabError>
    where
        I: IntoIterator<Item = &'t str>,
        P: LanguageProcessor + Morphology,
    {
        let lemmas: Vec<String> = texts
            .into_iter()
            .flat_map(|text| text_lemmas(text, processor))
            .collect();

        if lemmas.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let mut words = self.words.write().await;
        for lemma in &lemmas {
            words
                .entry(lemma.clone())
                .and_modify(|rating| rating.occurrences += 1)
                .or_insert_with(|| WordRating::first_seen(now));
        }

        self.store.save(&words).await?;
        tracing::debug!("Indexed {} words", lemmas.len());
        Ok(lemmas.len())
    }

    pub async fn set_stars(&self, word: &str, stars: u8) -> Result<WordRating, VocabError> {
        if stars > MAX_STARS {
            return Err(VocabError::InvalidStars(stars));
        }
        let key = word_key(word);
        if key.is_empty() {
            return Err(VocabError::EmptyWord);
        }

        let now = Utc::now();
        let mut words = self.words.write().await;
        let rating = words
            .entry(key)
            .or_insert_with(|| WordRating::unseen(now));
        rating.stars = stars;
        rating.last_updated = now;
        let rating = rating.clone();

        self.store.save(&words).await?;
        Ok(rating)
    }

    pub async fn get(&self, word: &str) -> Option<WordRating> {
        self.words.read().await.get(&word_key(word)).cloned()
    }

    /// Snapshot of every rated or indexed word
    pub async fn vocabulary(&self) -> Vocabulary {
        self.words.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.words.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.words.read().await.is_empty()
    }

    pub async fn export_csv(&self) -> String {
        export::to_csv(&*self.words.read().await)
    }

    pub async fn export_json(&self) -> Result<String, VocabError> {
        let words = self.words.read().await;
        export::to_json(&words).map_err(|e| VocabError::Store(e.into()))
    }
}

/// Base forms of the valid tokens of `text`, as vocabulary keys
fn text_lemmas<P>(text: &str, processor: &P) -> Vec<String>
where
    P: LanguageProcessor + Morphology,
{
    processor
        .tokenize(text)
        .into_iter()
        .filter(|token| processor.is_valid_word(&token.surface))
        .map(|token| word_key(&processor.base_form(&token.surface)))
        .filter(|lemma| !lemma.is_empty())
        .collect()
}

/// Entries are stored lower-cased so "Maison" and "maison" share a rating
fn word_key(word: &str) -> String {
    word.trim().to_lowercase()
}
