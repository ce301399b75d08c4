use parole_types::VariationSet;
use serde::{Deserialize, Serialize};

/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "fr", ...)
    fn language_code(&self) -> &str;

    /// Accent and case insensitive form used for comparisons
    fn normalize(&self, text: &str) -> String;

    /// Break display text into word tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Gate applied before a token is looked up or indexed
    fn is_valid_word(&self, word: &str) -> bool;
}

/// Lemmatization and inflection expansion
pub trait Morphology: Send + Sync {
    /// Dictionary form of a surface word
    fn base_form(&self, word: &str) -> String;

    /// Every normalized surface form that may share the word's lemma.
    /// Always contains the normalized word itself.
    fn variations(&self, word: &str) -> VariationSet;

    /// Words linked to this one in the lexicon; empty for invalid or unknown words
    fn related_words(&self, word: &str) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    /// Byte offset of `surface` in the tokenized text
    pub position: usize,
}
