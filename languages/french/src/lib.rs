pub mod encoding;
pub mod lexicon;
pub mod morphology;
pub mod processor;
pub mod validity;

pub use encoding::{FrenchPreprocessor, fix_encoding};
pub use lexicon::{
    AdjectiveFormEntry, ExpressionEntry, Gender, Lexicon, NounRelationEntry, VerbConjugationEntry,
};
pub use morphology::{ConjugationClass, FrenchMorphology, WordInfo, WordType, regular_forms};
pub use processor::FrenchProcessor;
pub use validity::is_valid_french_word;
