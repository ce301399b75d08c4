use parole_core::{LanguageProcessor, Morphology, Preprocessor, Token, normalize};
use parole_types::VariationSet;

use crate::encoding::FrenchPreprocessor;
use crate::morphology::{FrenchMorphology, WordInfo};
use crate::validity::is_valid_french_word;

/// Characters that separate words in display text, besides whitespace
const WORD_SEPARATORS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}', '<', '>',
];

/// French language processor
#[derive(Debug, Clone, Default)]
pub struct FrenchProcessor {
    morphology: FrenchMorphology,
}

impl FrenchProcessor {
    /// Create a processor over the built-in lexicon
    pub fn new() -> Self {
        Self {
            morphology: FrenchMorphology::new(),
        }
    }

    pub fn morphology(&self) -> &FrenchMorphology {
        &self.morphology
    }

    pub fn word_info(&self, word: &str) -> Option<WordInfo> {
        self.morphology.word_info(word)
    }

    /// Ingestion cleanup: encoding repair, trim, NFC
    pub fn preprocess(&self, text: &str) -> String {
        FrenchPreprocessor.process(text)
    }
}

impl LanguageProcessor for FrenchProcessor {
    fn language_code(&self) -> &str {
        "fr"
    }

    fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, c) in text.char_indices() {
            let is_separator = c.is_whitespace() || WORD_SEPARATORS.contains(&c);
            match (start, is_separator) {
                (Some(s), true) => {
                    tokens.push(make_token(&text[s..idx], s));
                    start = None;
                }
                (None, false) => start = Some(idx),
                _ => {}
            }
        }

        if let Some(s) = start {
            tokens.push(make_token(&text[s..], s));
        }

        tokens
    }

    fn is_valid_word(&self, word: &str) -> bool {
        is_valid_french_word(word)
    }
}

impl Morphology for FrenchProcessor {
    fn base_form(&self, word: &str) -> String {
        self.morphology.base_form(word)
    }

    fn variations(&self, word: &str) -> VariationSet {
        self.morphology.variations(word)
    }

    fn related_words(&self, word: &str) -> Vec<String> {
        self.morphology.related_words(word)
    }
}

fn make_token(surface: &str, position: usize) -> Token {
    Token {
        surface: surface.to_string(),
        normalized: normalize(surface),
        position,
    }
}
