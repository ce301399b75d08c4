use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parole_core::normalize;
use serde::{Deserialize, Serialize};

static LEXICON: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::with_defaults()));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
        }
    }
}

/// Known surface forms of an irregular verb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbConjugationEntry {
    pub lemma: String,
    pub forms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounRelationEntry {
    pub lemma: String,
    pub gender: Gender,
    pub related: Vec<String>,
}

/// Feminine, plural and feminine plural forms of an adjective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveFormEntry {
    pub lemma: String,
    pub forms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionEntry {
    pub expression: String,
    pub meaning: String,
    pub register: String,
}

/// Hand-authored French lookup tables.
///
/// Verb, noun and adjective lookups are keyed by normalized text, so
/// "etre", "Être" and "être" all hit the same entry. When two entries
/// claim the same form the one added first wins.
#[derive(Debug, Default)]
pub struct Lexicon {
    verbs: Vec<VerbConjugationEntry>,
    verb_index: HashMap<String, usize>,
    nouns: Vec<NounRelationEntry>,
    noun_index: HashMap<String, usize>,
    adjectives: Vec<AdjectiveFormEntry>,
    adjective_index: HashMap<String, usize>,
    expressions: Vec<ExpressionEntry>,
}

impl Lexicon {
    /// Create empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide built-in tables, initialized on first use
    pub fn global() -> Arc<Lexicon> {
        Arc::clone(&LEXICON)
    }

    /// Create with the built-in French tables
    pub fn with_defaults() -> Self {
        let mut lexicon = Self::new();

        let irregular_verbs: [(&str, &[&str]); 13] = [
            ("être", &["suis", "es", "est", "sommes", "êtes", "sont", "été"]),
            ("avoir", &["ai", "as", "a", "avons", "avez", "ont", "eu"]),
            (
                "aller",
                &["vais", "vas", "va", "allons", "allez", "vont", "allé", "allée", "allés", "allées"],
            ),
            ("faire", &["fais", "fait", "faisons", "faites", "font"]),
            ("dire", &["dis", "dit", "disons", "dites", "disent"]),
            ("pouvoir", &["peux", "peut", "pouvons", "pouvez", "peuvent", "pu"]),
            ("vouloir", &["veux", "veut", "voulons", "voulez", "veulent", "voulu"]),
            ("devoir", &["dois", "doit", "devons", "devez", "doivent", "dû"]),
            ("savoir", &["sais", "sait", "savons", "savez", "savent", "su"]),
            ("venir", &["viens", "vient", "venons", "venez", "viennent", "venu"]),
            ("prendre", &["prends", "prend", "prenons", "prenez", "prennent", "pris"]),
            ("voir", &["vois", "voit", "voyons", "voyez", "voient", "vu"]),
            ("mettre", &["mets", "met", "mettons", "mettez", "mettent", "mis"]),
        ];
        for (lemma, forms) in irregular_verbs {
            lexicon.add_verb(lemma, forms);
        }

        let nouns: [(&str, Gender, &[&str]); 6] = [
            ("maison", Gender::Feminine, &["appartement", "logement", "habitation"]),
            ("chat", Gender::Masculine, &["chatte", "chaton", "félin"]),
            ("école", Gender::Feminine, &["collège", "lycée", "université"]),
            ("travail", Gender::Masculine, &["emploi", "métier", "boulot"]),
            ("ville", Gender::Feminine, &["village", "cité", "capitale"]),
            ("voiture", Gender::Feminine, &["auto", "véhicule", "automobile"]),
        ];
        for (lemma, gender, related) in nouns {
            lexicon.add_noun(lemma, gender, related);
        }

        let adjectives: [(&str, &[&str]); 5] = [
            ("beau", &["belle", "beaux", "belles"]),
            ("nouveau", &["nouvelle", "nouveaux", "nouvelles"]),
            ("grand", &["grande", "grands", "grandes"]),
            ("petit", &["petite", "petits", "petites"]),
            ("bon", &["bonne", "bons", "bonnes"]),
        ];
        for (lemma, forms) in adjectives {
            lexicon.add_adjective(lemma, forms);
        }

        let expressions = [
            ("avoir lieu", "to take place", "standard"),
            ("tout à fait", "completely", "standard"),
            ("avoir besoin de", "to need", "standard"),
            ("en train de", "in the middle of", "standard"),
            ("d'accord", "agreed", "familiar"),
        ];
        for (expression, meaning, register) in expressions {
            lexicon.add_expression(expression, meaning, register);
        }

        lexicon
    }

    pub fn add_verb(&mut self, lemma: &str, forms: &[&str]) {
        let idx = self.verbs.len();
        self.verbs.push(VerbConjugationEntry {
            lemma: lemma.to_string(),
            forms: forms.iter().map(|f| f.to_string()).collect(),
        });

        self.verb_index.entry(normalize(lemma)).or_insert(idx);
        for form in forms {
            self.verb_index.entry(normalize(form)).or_insert(idx);
        }
    }

    pub fn add_noun(&mut self, lemma: &str, gender: Gender, related: &[&str]) {
        let idx = self.nouns.len();
        self.nouns.push(NounRelationEntry {
            lemma: lemma.to_string(),
            gender,
            related: related.iter().map(|r| r.to_string()).collect(),
        });
        self.noun_index.entry(normalize(lemma)).or_insert(idx);
    }

    pub fn add_adjective(&mut self, lemma: &str, forms: &[&str]) {
        let idx = self.adjectives.len();
        self.adjectives.push(AdjectiveFormEntry {
            lemma: lemma.to_string(),
            forms: forms.iter().map(|f| f.to_string()).collect(),
        });

        self.adjective_index.entry(normalize(lemma)).or_insert(idx);
        for form in forms {
            self.adjective_index.entry(normalize(form)).or_insert(idx);
        }
    }

    pub fn add_expression(&mut self, expression: &str, meaning: &str, register: &str) {
        self.expressions.push(ExpressionEntry {
            expression: expression.to_string(),
            meaning: meaning.to_string(),
            register: register.to_string(),
        });
    }

    /// Matches the lemma or any listed surface form
    pub fn lookup_irregular_verb(&self, word: &str) -> Option<&VerbConjugationEntry> {
        self.verb_index
            .get(&normalize(word))
            .and_then(|&idx| self.verbs.get(idx))
    }

    /// Matches the noun lemma only
    pub fn lookup_noun(&self, word: &str) -> Option<&NounRelationEntry> {
        self.noun_index
            .get(&normalize(word))
            .and_then(|&idx| self.nouns.get(idx))
    }

    /// Matches the lemma or any inflected form
    pub fn lookup_adjective(&self, word: &str) -> Option<&AdjectiveFormEntry> {
        self.adjective_index
            .get(&normalize(word))
            .and_then(|&idx| self.adjectives.get(idx))
    }

    /// First expression whose text contains `word` verbatim.
    ///
    /// Plain substring containment on the raw word: "lieu" and even "ieu"
    /// both find "avoir lieu".
    pub fn lookup_expression(&self, word: &str) -> Option<&ExpressionEntry> {
        if word.is_empty() {
            return None;
        }
        self.expressions.iter().find(|e| e.expression.contains(word))
    }

    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    pub fn adjective_count(&self) -> usize {
        self.adjectives.len()
    }

    pub fn expression_count(&self) -> usize {
        self.expressions.len()
    }
}
