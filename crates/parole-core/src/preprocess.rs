use unicode_normalization::UnicodeNormalization;

/// Case-fold and strip diacritics: "Étudiant" → "etudiant".
///
/// Lower-cases, decomposes (NFD) and drops the combining diacritical marks
/// block (U+0300..=U+036F). Total and idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .collect()
}

#[inline]
fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Cleans raw cell text before it becomes part of a record
pub trait Preprocessor {
    /// Language specific repair applied before anything else
    fn repair(&self, text: &str) -> String {
        text.to_string()
    }

    fn process(&self, text: &str) -> String {
        let text = self.repair(text);
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Spreadsheets sometimes hand us decomposed accents
        text.nfc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
