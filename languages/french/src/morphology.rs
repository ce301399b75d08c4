use std::sync::Arc;

use parole_core::{Morphology, normalize};
use parole_types::VariationSet;
use serde::{Deserialize, Serialize};

use crate::lexicon::{Gender, Lexicon};
use crate::validity::is_valid_french_word;

const INFINITIVE_ENDINGS: [&str; 3] = ["er", "ir", "re"];

/// Checked in order; the first suffix that matches is replaced with "-er"
const INFLECTION_SUFFIXES: [&str; 8] = ["e", "es", "ent", "é", "ée", "és", "ées", "ant"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Verb,
    Noun,
    Adjective,
    Expression,
    Unknown,
}

impl WordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Verb => "verb",
            WordType::Noun => "noun",
            WordType::Adjective => "adjective",
            WordType::Expression => "expression",
            WordType::Unknown => "unknown",
        }
    }
}

/// What the lexicon knows about a surface word. Computed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WordInfo {
    Verb {
        base_form: String,
        is_irregular: bool,
        conjugations: Vec<String>,
    },
    Noun {
        base_form: String,
        gender: Gender,
        related: Vec<String>,
    },
    Adjective {
        base_form: String,
        forms: Vec<String>,
    },
    Expression {
        base_form: String,
        meaning: String,
        register: String,
    },
    Unknown {
        base_form: String,
    },
}

impl WordInfo {
    pub fn word_type(&self) -> WordType {
        match self {
            WordInfo::Verb { .. } => WordType::Verb,
            WordInfo::Noun { .. } => WordType::Noun,
            WordInfo::Adjective { .. } => WordType::Adjective,
            WordInfo::Expression { .. } => WordType::Expression,
            WordInfo::Unknown { .. } => WordType::Unknown,
        }
    }

    pub fn base_form(&self) -> &str {
        match self {
            WordInfo::Verb { base_form, .. }
            | WordInfo::Noun { base_form, .. }
            | WordInfo::Adjective { base_form, .. }
            | WordInfo::Expression { base_form, .. }
            | WordInfo::Unknown { base_form } => base_form,
        }
    }
}

/// Regular conjugation patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConjugationClass {
    /// parler
    Er,
    /// finir: present plural and participle take the -iss- infix
    IrIss,
    /// partir
    Ir,
    /// vendre
    Re,
}

impl ConjugationClass {
    /// Candidate classes for a normalized infinitive. An "-ir" verb may follow either pattern.
    pub fn for_infinitive(normalized: &str) -> &'static [ConjugationClass] {
        if normalized.ends_with("er") {
            &[ConjugationClass::Er]
        } else if normalized.ends_with("ir") {
            &[ConjugationClass::IrIss, ConjugationClass::Ir]
        } else if normalized.ends_with("re") {
            &[ConjugationClass::Re]
        } else {
            &[]
        }
    }

    /// Present tense, past participle and present participle endings
    pub fn suffixes(&self) -> &'static [&'static str] {
        match self {
            ConjugationClass::Er => &["e", "es", "ent", "é", "ée", "és", "ées", "ant"],
            ConjugationClass::IrIss => &[
                "is", "it", "issons", "issez", "issent", "i", "ie", "is", "ies", "issant",
            ],
            ConjugationClass::Ir => &["s", "t", "ons", "ez", "ent", "i", "ie", "is", "ies", "ant"],
            ConjugationClass::Re => &["s", "", "ons", "ez", "ent", "u", "ue", "us", "ues", "ant"],
        }
    }

    /// Normalized surface forms built on `stem`
    pub fn conjugate<'a>(&self, stem: &'a str) -> impl Iterator<Item = String> + 'a {
        self.suffixes()
            .iter()
            .map(move |suffix| normalize(&format!("{stem}{suffix}")))
    }
}

/// Regular forms of a normalized infinitive, in generation order and without
/// duplicates. Empty for words without an infinitive ending.
pub fn regular_forms(normalized_infinitive: &str) -> Vec<String> {
    let mut forms: Vec<String> = Vec::new();

    let classes = ConjugationClass::for_infinitive(normalized_infinitive);
    if classes.is_empty() {
        return forms;
    }

    // Every infinitive ending is two ASCII bytes
    let stem = &normalized_infinitive[..normalized_infinitive.len() - 2];
    for class in classes {
        for form in class.conjugate(stem) {
            if !form.is_empty() && !forms.contains(&form) {
                forms.push(form);
            }
        }
    }

    forms
}

fn has_infinitive_ending(normalized: &str) -> bool {
    INFINITIVE_ENDINGS
        .iter()
        .any(|ending| normalized.ends_with(ending))
}

/// Lemmatizer and inflection generator backed by a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct FrenchMorphology {
    lexicon: Arc<Lexicon>,
}

impl Default for FrenchMorphology {
    fn default() -> Self {
        Self::new()
    }
}

impl FrenchMorphology {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::global())
    }

    /// Morphology over caller-supplied tables
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Dictionary form of `word`.
    ///
    /// Irregular verbs come from the lexicon. Words already ending in an
    /// infinitive ending are returned as given. Otherwise the first matching
    /// inflection suffix is swapped for "-er", whatever the verb's real class,
    /// so "finissent" becomes "finisser". Anything else is returned as given.
    pub fn base_form(&self, word: &str) -> String {
        let normalized = normalize(word);

        if let Some(entry) = self.lexicon.lookup_irregular_verb(&normalized) {
            return entry.lemma.clone();
        }

        if has_infinitive_ending(&normalized) {
            return word.to_string();
        }

        for suffix in INFLECTION_SUFFIXES {
            let suffix = normalize(suffix);
            if let Some(stem) = normalized.strip_suffix(suffix.as_str()) {
                return format!("{stem}er");
            }
        }

        word.to_string()
    }

    /// Classify `word`. `None` if it fails [`is_valid_french_word`].
    ///
    /// Tables are consulted in a fixed order (irregular verbs, nouns,
    /// adjectives, expressions) and the first hit wins.
    pub fn word_info(&self, word: &str) -> Option<WordInfo> {
        if !is_valid_french_word(word) {
            return None;
        }

        let normalized = normalize(word);

        if let Some(verb) = self.lexicon.lookup_irregular_verb(&normalized) {
            return Some(WordInfo::Verb {
                base_form: verb.lemma.clone(),
                is_irregular: true,
                conjugations: verb.forms.clone(),
            });
        }

        if let Some(noun) = self.lexicon.lookup_noun(&normalized) {
            return Some(WordInfo::Noun {
                base_form: noun.lemma.clone(),
                gender: noun.gender,
                related: noun.related.clone(),
            });
        }

        if let Some(adjective) = self.lexicon.lookup_adjective(&normalized) {
            let mut forms = Vec::with_capacity(adjective.forms.len() + 1);
            forms.push(adjective.lemma.clone());
            forms.extend(adjective.forms.iter().cloned());
            return Some(WordInfo::Adjective {
                base_form: adjective.lemma.clone(),
                forms,
            });
        }

        if let Some(expression) = self.lexicon.lookup_expression(word) {
            return Some(WordInfo::Expression {
                base_form: expression.expression.clone(),
                meaning: expression.meaning.clone(),
                register: expression.register.clone(),
            });
        }

        let base_form = self.base_form(word);
        let normalized_base = normalize(&base_form);
        if has_infinitive_ending(&normalized_base) {
            return Some(WordInfo::Verb {
                base_form,
                is_irregular: false,
                conjugations: regular_forms(&normalized_base),
            });
        }

        Some(WordInfo::Unknown { base_form })
    }

    /// Every normalized form that may share the lemma of `word`
    pub fn variations(&self, word: &str) -> VariationSet {
        let normalized = normalize(word);
        let mut variations = VariationSet::new(normalized.clone());

        if normalized.is_empty() {
            return variations;
        }

        variations.insert(normalize(&self.base_form(word)));

        match self.word_info(word) {
            Some(WordInfo::Noun { related, .. }) => {
                variations.extend(related.iter().map(|r| normalize(r)));
            }
            Some(WordInfo::Adjective { forms, .. }) => {
                variations.extend(forms.iter().map(|f| normalize(f)));
            }
            Some(WordInfo::Verb { conjugations, .. }) => {
                variations.extend(conjugations.iter().map(|c| normalize(c)));
            }
            _ => {}
        }

        variations.extend(regular_forms(&normalized));

        tracing::trace!("{} variations for '{}'", variations.len(), word);
        variations
    }

    /// Conjugations for verbs, related nouns for nouns, forms for adjectives.
    /// Empty for invalid words, expressions and unknown words.
    pub fn related_words(&self, word: &str) -> Vec<String> {
        match self.word_info(word) {
            Some(WordInfo::Verb { conjugations, .. }) => conjugations,
            Some(WordInfo::Noun { related, .. }) => related,
            Some(WordInfo::Adjective { forms, .. }) => forms,
            _ => Vec::new(),
        }
    }
}

impl Morphology for FrenchMorphology {
    fn base_form(&self, word: &str) -> String {
        FrenchMorphology::base_form(self, word)
    }

    fn variations(&self, word: &str) -> VariationSet {
        FrenchMorphology::variations(self, word)
    }

    fn related_words(&self, word: &str) -> Vec<String> {
        FrenchMorphology::related_words(self, word)
    }
}
